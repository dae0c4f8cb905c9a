// File: crates/plotbook-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing one PNG per chart kind.

use plotbook_core::{output_path, Chart, RenderOptions, Series, SeriesKind};

fn render_and_check(chart: &Chart, opts: &RenderOptions, filename: &str) {
    let out = output_path("target/test_out/smoke", filename).expect("resolve output path");
    chart.render_to_png(opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_line_png() {
    let mut chart = Chart::with_title("Lines");
    chart.add_series(Series::with_points(
        SeriesKind::Line,
        vec![(1.0, 10.0), (2.0, 20.0), (3.0, 25.0), (4.0, 30.0), (5.0, 40.0)],
    ));
    chart.autoscale_axes(0.05);

    render_and_check(&chart, &RenderOptions::default(), "line.png");

    // Also verify the in-memory API works
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_scatter_png() {
    let mut chart = Chart::with_title("Scatter");
    chart.add_series(Series::with_points(
        SeriesKind::Scatter,
        vec![(5.0, 99.0), (7.0, 86.0), (2.0, 111.0), (9.0, 87.0)],
    ));
    chart.autoscale_axes(0.05);

    render_and_check(&chart, &RenderOptions::default(), "scatter.png");
}

#[test]
fn render_bar_png() {
    let mut chart = Chart::with_title("Bars");
    chart.add_series(
        Series::categorical(
            SeriesKind::Bar,
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![3.0, 7.0, 1.0, 8.0],
        )
        .expect("parallel sequences"),
    );
    chart.autoscale_axes(0.05);

    render_and_check(&chart, &RenderOptions::default(), "bar.png");
}

#[test]
fn render_pie_png() {
    let mut chart = Chart::with_title("Pie");
    chart.add_series(
        Series::categorical(
            SeriesKind::Pie,
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![3.0, 7.0, 1.0, 8.0],
        )
        .expect("parallel sequences"),
    );

    render_and_check(&chart, &RenderOptions::square(480), "pie.png");
}

#[test]
fn render_empty_chart_png() {
    // No series at all still produces a valid, non-empty image.
    let chart = Chart::new();
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
