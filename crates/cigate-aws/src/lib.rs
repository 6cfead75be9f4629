//! AWS drivers.
//!
//! Talks to CodeBuild and Secrets Manager through the AWS SDK. Credentials and
//! region come from the default provider chain.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codebuild;
mod errors;
mod sdk;
mod secrets_manager;

pub use codebuild::CodeBuildService;
pub use errors::AwsError;
pub use sdk::load_sdk_config;
pub use secrets_manager::SecretsManagerStore;
