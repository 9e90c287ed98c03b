//! Error types for role discovery and outline rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for outline operations.
pub type OutlineResult<T> = Result<T, OutlineError>;

/// Errors that can abort an outline run.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// Reading a file or directory listing failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tasks or vars file is not valid YAML.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A file decoded fine but its top level has the wrong shape.
    #[error("Unexpected content in {}: expected {expected}", path.display())]
    UnexpectedShape { path: PathBuf, expected: &'static str },

    /// A tree was requested for something that is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Writing to the output sink failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing an outline entry failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutlineError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
