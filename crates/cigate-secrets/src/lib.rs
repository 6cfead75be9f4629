//! Secrets module.

#![warn(clippy::all)]

mod cache;
mod credential;
mod env;
mod errors;
mod interface;

pub use self::{
    cache::SecretCache,
    credential::Credential,
    env::EnvSecretStore,
    errors::{Result, SecretError},
    interface::SecretStore,
};

#[cfg(any(test, feature = "testkit"))]
pub use self::interface::MockSecretStore;
