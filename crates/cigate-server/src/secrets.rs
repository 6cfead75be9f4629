//! Secret store wrappers.

use async_trait::async_trait;
use cigate_secrets::{Result, SecretStore};

use crate::metrics::SECRET_STORE_CALLS;

/// Secret store with metrics.
pub struct MetricsSecretStore {
    inner: Box<dyn SecretStore>,
}

impl MetricsSecretStore {
    /// Creates a new store.
    pub fn new(inner: Box<dyn SecretStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SecretStore for MetricsSecretStore {
    async fn secret_get(&self, secret_id: &str) -> Result<String> {
        SECRET_STORE_CALLS.inc();
        self.inner.secret_get(secret_id).await
    }
}
