//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Secret store unreachable, or key missing from the bundle.
    #[error("Secret unavailable: {source}")]
    SecretUnavailable {
        source: cigate_secrets::SecretError,
    },

    /// Build service rejected or failed the start call.
    #[error("Build dispatch failed: {source}")]
    BuildDispatchFailed {
        source: cigate_build_interface::BuildError,
    },

    /// Build service failed to return reports.
    #[error("Report fetch failed: {source}")]
    ReportFetchFailed {
        source: cigate_build_interface::BuildError,
    },

    /// Source-control host call failed.
    #[error("Status update failed: {source}")]
    StatusUpdateFailed {
        source: cigate_ghapi_interface::ApiError,
    },

    /// Wraps [`cigate_models::ModelError`].
    #[error("Invalid event: {source}")]
    ModelError { source: cigate_models::ModelError },

    /// Wraps [`serde_json::Error`].
    #[error("Could not parse event: {source}")]
    EventParseError { source: serde_json::Error },

    /// Wraps [`cigate_crypto::CryptoError`].
    #[error("Crypto error: {source}")]
    CryptoError { source: cigate_crypto::CryptoError },
}

impl From<cigate_secrets::SecretError> for DomainError {
    fn from(e: cigate_secrets::SecretError) -> Self {
        Self::SecretUnavailable { source: e }
    }
}

impl From<cigate_ghapi_interface::ApiError> for DomainError {
    fn from(e: cigate_ghapi_interface::ApiError) -> Self {
        match e {
            cigate_ghapi_interface::ApiError::CredentialsError { source } => {
                Self::SecretUnavailable { source }
            }
            e => Self::StatusUpdateFailed { source: e },
        }
    }
}

impl From<cigate_models::ModelError> for DomainError {
    fn from(e: cigate_models::ModelError) -> Self {
        Self::ModelError { source: e }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::EventParseError { source: e }
    }
}

impl From<cigate_crypto::CryptoError> for DomainError {
    fn from(e: cigate_crypto::CryptoError) -> Self {
        Self::CryptoError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
