use async_trait::async_trait;

use crate::Result;

/// Secret store interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Get a secret bundle, as a JSON string.
    async fn secret_get(&self, secret_id: &str) -> Result<String>;
}
