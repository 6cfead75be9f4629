//! Secrets Manager driver.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client;
use cigate_secrets::{Result, SecretStore};

use crate::errors::AwsError;

/// Secrets Manager store.
pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    /// Creates a new store.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    #[tracing::instrument(skip(self))]
    async fn secret_get(&self, secret_id: &str) -> Result<String> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| AwsError::from_sdk(e).into_secret_error(secret_id))?;

        output
            .secret_string()
            .map(ToString::to_string)
            .ok_or_else(|| {
                AwsError::IncompleteResponse {
                    field: "SecretString",
                }
                .into_secret_error(secret_id)
            })
    }
}
