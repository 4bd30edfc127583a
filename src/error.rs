use std::path::PathBuf;
use thiserror::Error;

use crate::series::EmptyReason;

/// The main error type for plotprep operations.
///
/// Normalization itself never fails; these errors only arise at the edges
/// (reading input, loading options, writing descriptors, CLI policy).
#[derive(Debug, Error)]
pub enum PlotprepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input JSON from {path}: {source}")]
    InputJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input in {path}: {message}")]
    InvalidInput { path: PathBuf, message: String },

    #[error("Failed to load options from {path}: {message}")]
    OptionsParse { path: PathBuf, message: String },

    #[error("Failed to write descriptor to {path}: {source}")]
    DescriptorWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Nothing to plot: {reason}")]
    NothingToPlot { reason: EmptyReason },

    #[error("Strict mode: sanitization produced {warning_count} warning(s)")]
    StrictFailure { warning_count: usize },
}
