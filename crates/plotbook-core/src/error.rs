// File: crates/plotbook-core/src/error.rs
// Summary: Error type shared by chart construction, rendering, and output path resolution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Labels and values of a categorical series must be parallel sequences.
    #[error("labels and values must have the same length: {labels} vs {values}")]
    LengthMismatch { labels: usize, values: usize },

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
