//! Validation utilities.

use std::fmt::Write;

use cigate_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        let _ = write!(error, "\n  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        let _ = write!(error, "\n  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "CIGATE_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "CIGATE_SERVER_BIND_PORT");
    }

    // Check API configuration
    if config.api.driver == ApiDriver::GitHub {
        if config.api.github.owner.is_empty() {
            _missing(&mut error, "CIGATE_API_GITHUB_OWNER");
        }
        if config.api.github.status_context.is_empty() {
            _missing(&mut error, "CIGATE_API_GITHUB_STATUS_CONTEXT");
        }
    }

    // Check secrets configuration
    if config.secrets.secret_id.is_empty() {
        _missing(&mut error, "CIGATE_SECRETS_SECRET_ID");
    }

    // Check build configuration
    if config.build.project_name.is_empty() {
        _missing(&mut error, "CIGATE_BUILD_PROJECT_NAME");
    }

    // Check reports threshold
    let threshold = config.reports.coverage_threshold;
    if !(0.0..=100.0).contains(&threshold) {
        _invalid(
            &mut error,
            "CIGATE_REPORTS_COVERAGE_THRESHOLD",
            "should be a percentage",
        );
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
