//! Build service errors.

use thiserror::Error;

/// Build service error.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Build service rejected the request: {message}")]
    Rejected { message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `BuildError`.
pub type Result<T, E = BuildError> = core::result::Result<T, E>;
