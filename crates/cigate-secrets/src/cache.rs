//! Process-wide secret cache.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::{Credential, Result, SecretError, SecretStore};

type SlotKey = (String, String);

/// Fetch-once cache over a [`SecretStore`].
///
/// A slot is filled on the first successful lookup of a `(secret_id, key)` pair
/// and is never invalidated. Concurrent first lookups may both reach the store;
/// the last one to finish wins, which is harmless since both hold the same value.
pub struct SecretCache {
    store: Box<dyn SecretStore>,
    slots: RwLock<HashMap<SlotKey, Credential>>,
}

impl SecretCache {
    pub fn new(store: Box<dyn SecretStore>) -> Self {
        Self {
            store,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Get a credential, fetching its bundle from the store when not cached yet.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, secret_id: &str, key: &str) -> Result<Credential> {
        let slot_key = (secret_id.to_string(), key.to_string());
        if let Some(credential) = self.slots.read().await.get(&slot_key) {
            return Ok(credential.clone());
        }

        debug!(message = "Fetching secret from store", secret_id = secret_id);
        let bundle = self.store.secret_get(secret_id).await?;
        let credential = extract_key(secret_id, key, &bundle)?;

        self.slots
            .write()
            .await
            .insert(slot_key, credential.clone());

        Ok(credential)
    }
}

fn extract_key(secret_id: &str, key: &str, bundle: &str) -> Result<Credential> {
    let values: HashMap<String, serde_json::Value> =
        serde_json::from_str(bundle).map_err(|e| SecretError::InvalidBundle {
            secret_id: secret_id.into(),
            source: e,
        })?;

    match values.get(key) {
        Some(serde_json::Value::String(value)) => Ok(Credential::new(value.clone())),
        _ => Err(SecretError::MissingKey {
            secret_id: secret_id.into(),
            key: key.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockSecretStore;

    const BUNDLE: &str = r#"{"GitPAT": "token", "GithubWebhookSecretKey": "secret"}"#;

    #[tokio::test]
    async fn fetches_once_per_key() {
        let mut store = MockSecretStore::new();
        store
            .expect_secret_get()
            .withf(|secret_id| secret_id == "git-oauth-token")
            .times(2)
            .returning(|_| Ok(BUNDLE.into()));

        let cache = SecretCache::new(Box::new(store));
        for _ in 0..3 {
            let token = cache.get("git-oauth-token", "GitPAT").await.unwrap();
            assert_eq!(token.expose(), "token");
        }
        for _ in 0..3 {
            let secret = cache
                .get("git-oauth-token", "GithubWebhookSecretKey")
                .await
                .unwrap();
            assert_eq!(secret.expose(), "secret");
        }
    }

    #[tokio::test]
    async fn missing_key_is_not_cached() {
        let mut store = MockSecretStore::new();
        store
            .expect_secret_get()
            .times(2)
            .returning(|_| Ok(BUNDLE.into()));

        let cache = SecretCache::new(Box::new(store));
        for _ in 0..2 {
            assert!(matches!(
                cache.get("git-oauth-token", "Unknown").await,
                Err(SecretError::MissingKey { .. })
            ));
        }
    }

    #[tokio::test]
    async fn store_error() {
        let mut store = MockSecretStore::new();
        store.expect_secret_get().once().returning(|id| {
            Err(SecretError::StoreError {
                secret_id: id.into(),
                source: "unreachable".into(),
            })
        });

        let cache = SecretCache::new(Box::new(store));
        assert!(matches!(
            cache.get("git-oauth-token", "GitPAT").await,
            Err(SecretError::StoreError { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_bundle() {
        let mut store = MockSecretStore::new();
        store
            .expect_secret_get()
            .once()
            .returning(|_| Ok("not json".into()));

        let cache = SecretCache::new(Box::new(store));
        assert!(matches!(
            cache.get("git-oauth-token", "GitPAT").await,
            Err(SecretError::InvalidBundle { .. })
        ));
    }
}
