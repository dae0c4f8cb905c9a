// File: crates/plotbook-core/src/output.rs
// Summary: Output directory management; resolves chart image paths under a fixed "Output" subdirectory.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the subdirectory that receives generated images.
pub const OUTPUT_DIR: &str = "Output";

/// Resolve the path a chart image should be written to.
///
/// Ensures `base_dir/Output` exists, creating it and any missing parents;
/// repeated calls are no-ops. Returns `base_dir/Output/filename` without
/// checking the file itself; callers overwrite any previous image. Fails only
/// when the filesystem refuses the directory (permission denied, or the name
/// is taken by a non-directory entry).
pub fn output_path(base_dir: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
    let dir = base_dir.as_ref().join(OUTPUT_DIR);
    std::fs::create_dir_all(&dir)?;
    log::debug!("output directory ready at {}", dir.display());
    Ok(dir.join(filename))
}
