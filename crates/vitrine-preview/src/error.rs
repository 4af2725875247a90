//! Preview host errors.

use thiserror::Error;

use crate::logging::LoggingError;

/// Errors that stop the preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Configuration or carousel error from the core library.
    #[error(transparent)]
    Core(#[from] vitrine_core::Error),

    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Terminal read or write failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the preview host.
pub type Result<T> = std::result::Result<T, PreviewError>;
