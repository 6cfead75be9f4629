//! Secret errors.

use thiserror::Error;

/// Secret error.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Secret store error for '{secret_id}': {source}")]
    StoreError {
        secret_id: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Secret '{secret_id}' is not a JSON object: {source}")]
    InvalidBundle {
        secret_id: String,
        source: serde_json::Error,
    },

    #[error("Key '{key}' is missing from secret '{secret_id}'")]
    MissingKey { secret_id: String, key: String },
}

/// Result alias for `SecretError`.
pub type Result<T, E = SecretError> = core::result::Result<T, E>;
