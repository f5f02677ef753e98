//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used by every fallible API in this crate.
pub type Result<T> = std::result::Result<T, FramesyncError>;

#[derive(Debug, Error)]
pub enum FramesyncError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed line in a record list file. Carries enough context to
    /// point the user at the offending line.
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FramesyncError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
