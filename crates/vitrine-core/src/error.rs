//! Error types for Vitrine core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Vitrine core operations.
///
/// Carousel navigation never fails: out-of-range requests are ignored, so
/// nothing here describes a navigation error.
#[derive(Debug, Error)]
pub enum Error {
    /// A carousel needs at least one message.
    #[error("Message list is empty")]
    EmptyMessageList,

    /// Session storage rejected a read or write.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system operation failed.
    #[error("File system error at {path}: {message}")]
    FileSystem {
        /// Path where the error occurred.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::FileSystem`] from a path and any displayable cause.
    pub fn file_system(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::FileSystem {
            path: path.into(),
            message: cause.to_string(),
        }
    }
}
