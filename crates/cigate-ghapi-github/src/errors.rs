use cigate_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authorization header value")]
    InvalidHeaderError,

    #[error(transparent)]
    SecretError { source: cigate_secrets::SecretError },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<cigate_secrets::SecretError> for GitHubError {
    fn from(e: cigate_secrets::SecretError) -> Self {
        GitHubError::SecretError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::SecretError { source } => ApiError::CredentialsError { source },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
