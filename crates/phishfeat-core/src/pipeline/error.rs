//! Errors at the scaling / classification boundary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A parameter vector does not have one entry per schema column.
    #[error("{what}: expected {expected} columns, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Non-finite weights, a zero scale, or a threshold outside [0, 1].
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A classifier returned something other than 0 or 1.
    #[error("classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
