use thiserror::Error;

/// Model error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Missing build parameter '{name}' in build environment")]
    MissingBuildParameter { name: String },
    #[error("Invalid pull request number '{value}'")]
    InvalidPullRequestNumber { value: String },
}

/// Result alias for `ModelError`.
pub type Result<T, E = ModelError> = core::result::Result<T, E>;
