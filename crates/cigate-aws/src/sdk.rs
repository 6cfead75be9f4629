//! Shared SDK configuration.

use std::time::Duration;

use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region, SdkConfig};
use cigate_config::Config;
use tracing::debug;

/// Load the SDK configuration shared by every AWS driver.
///
/// Credentials are resolved lazily on first call, by the default chain
/// (environment, profile, SSO, container and instance metadata).
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
        TimeoutConfig::builder()
            .connect_timeout(Duration::from_millis(config.aws.connect_timeout))
            .build(),
    );

    if let Some(region) = &config.aws.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(url) = &config.aws.endpoint_url {
        loader = loader.endpoint_url(url);
    }

    let sdk_config = loader.load().await;
    debug!(
        region = ?sdk_config.region(),
        endpoint_url = ?sdk_config.endpoint_url(),
        message = "Loaded AWS configuration"
    );

    sdk_config
}
