use async_trait::async_trait;

use crate::{Result, SecretError, SecretStore};

const ENV_PREFIX: &str = "CIGATE_SECRET_";

/// Secret store reading JSON bundles from environment variables.
///
/// Secret `git-oauth-token` is read from `CIGATE_SECRET_GIT_OAUTH_TOKEN`.
#[derive(Clone, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn variable_name(secret_id: &str) -> String {
        let suffix: String = secret_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{ENV_PREFIX}{suffix}")
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    #[tracing::instrument(skip(self))]
    async fn secret_get(&self, secret_id: &str) -> Result<String> {
        let name = Self::variable_name(secret_id);
        std::env::var(&name).map_err(|e| SecretError::StoreError {
            secret_id: secret_id.into(),
            source: format!("{name}: {e}").into(),
        })
    }
}
