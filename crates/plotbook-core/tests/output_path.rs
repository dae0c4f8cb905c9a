// File: crates/plotbook-core/tests/output_path.rs
// Purpose: Output directory creation, idempotency, and path concatenation.

use std::path::PathBuf;

use plotbook_core::output_path;

fn scratch(name: &str) -> PathBuf {
    let base = PathBuf::from("target/test_out").join(name);
    // start from a clean slate so directory creation is actually exercised
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).unwrap();
    base
}

#[test]
fn creates_output_dir_and_joins_filename() {
    let base = scratch("resolver_fresh");
    assert!(!base.join("Output").exists());

    let path = output_path(&base, "basicPractice.png").expect("resolve path");
    assert_eq!(path, base.join("Output").join("basicPractice.png"));
    assert!(base.join("Output").is_dir());
}

#[test]
fn second_call_is_a_no_op() {
    let base = scratch("resolver_idempotent");
    let first = output_path(&base, "chart.png").expect("first call");
    let second = output_path(&base, "chart.png").expect("second call");
    assert_eq!(first, second);
    assert!(base.join("Output").is_dir());
}

#[test]
fn does_not_touch_the_file_itself() {
    let base = scratch("resolver_no_file");
    let path = output_path(&base, "chart.png").expect("resolve path");
    assert!(!path.exists(), "resolver must not create or check the image file");
}

#[test]
fn fails_when_output_name_is_taken_by_a_file() {
    let base = scratch("resolver_collision");
    std::fs::write(base.join("Output"), b"not a directory").unwrap();

    assert!(output_path(&base, "chart.png").is_err());
}
