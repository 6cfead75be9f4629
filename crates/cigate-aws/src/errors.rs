use std::error::Error as StdError;

use aws_sdk_codebuild::error::{ProvideErrorMetadata, SdkError};
use cigate_build_interface::BuildError;
use cigate_secrets::SecretError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// AWS error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum AwsError {
    /// Error returned by the service.
    #[error("{code}: {message}")]
    ServiceError { code: String, message: String },

    /// Request could not be built, sent or decoded.
    #[error("AWS SDK error: {source}")]
    SdkError { source: BoxError },

    /// Successful response missing an expected field.
    #[error("Incomplete response: missing {field}")]
    IncompleteResponse { field: &'static str },
}

impl AwsError {
    /// Classify an SDK error, keeping the code and message of service errors.
    pub(crate) fn from_sdk<E, R>(error: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        match error.as_service_error() {
            Some(service_error) => AwsError::ServiceError {
                code: service_error.code().unwrap_or("Unknown").into(),
                message: service_error.message().unwrap_or_default().into(),
            },
            None => AwsError::SdkError {
                source: error.into(),
            },
        }
    }

    pub(crate) fn into_secret_error(self, secret_id: &str) -> SecretError {
        SecretError::StoreError {
            secret_id: secret_id.into(),
            source: self.into(),
        }
    }
}

impl From<AwsError> for BuildError {
    fn from(e: AwsError) -> Self {
        match e {
            AwsError::ServiceError { .. } => BuildError::Rejected {
                message: e.to_string(),
            },
            e => BuildError::ImplementationError { source: e.into() },
        }
    }
}
