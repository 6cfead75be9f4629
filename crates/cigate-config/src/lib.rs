//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, BuildDriver, DriverError, SecretsDriver};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// Owner of the watched repositories.
    pub owner: String,
    /// Commit status context.
    pub status_context: String,
    /// Commit status description.
    pub status_description: String,
}

#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Secrets driver.
    pub driver: SecretsDriver,
    /// Secret bundle identifier.
    pub secret_id: String,
    /// Key of the GitHub personal access token in the bundle.
    pub token_key: String,
    /// Key of the webhook shared secret in the bundle.
    pub webhook_secret_key: String,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Build driver.
    pub driver: BuildDriver,
    /// Build project name.
    pub project_name: String,
    /// Prefix prepended to the build name in log links.
    pub log_group_prefix: String,
    /// Target URL used when a build could not be started.
    pub failure_url: String,
    /// Root URL of the report console.
    pub report_console_url: String,
}

#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Region, resolved by the default provider chain when unset.
    pub region: Option<String>,
    /// Endpoint override (for every service).
    pub endpoint_url: Option<String>,
    /// Connect timeout (in milliseconds).
    pub connect_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct ReportsConfig {
    /// Minimal line and branch coverage, exclusive.
    pub coverage_threshold: f64,
    /// Badge service root URL.
    pub badge_root_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Gate configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Secrets options.
    pub secrets: SecretsConfig,
    /// Build options.
    pub build: BuildConfig,
    /// AWS options.
    pub aws: AwsConfig,
    /// Reports options.
    pub reports: ReportsConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("CIGATE_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("CIGATE_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("CIGATE_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    owner: env_to_str("CIGATE_API_GITHUB_OWNER", "tamdilip"),
                    status_context: env_to_str(
                        "CIGATE_API_GITHUB_STATUS_CONTEXT",
                        "AWS CodeBuild - Test metrics check",
                    ),
                    status_description: env_to_str(
                        "CIGATE_API_GITHUB_STATUS_DESCRIPTION",
                        "AWS CodeBuild to check ember test cases and coverage",
                    ),
                },
            },
            secrets: SecretsConfig {
                driver: SecretsDriver::from_str(&env_to_str("CIGATE_SECRETS_DRIVER", "aws"))?,
                secret_id: env_to_str("CIGATE_SECRETS_SECRET_ID", "git-oauth-token"),
                token_key: env_to_str("CIGATE_SECRETS_TOKEN_KEY", "GitPAT"),
                webhook_secret_key: env_to_str(
                    "CIGATE_SECRETS_WEBHOOK_SECRET_KEY",
                    "GithubWebhookSecretKey",
                ),
            },
            build: BuildConfig {
                driver: BuildDriver::from_str(&env_to_str("CIGATE_BUILD_DRIVER", "codebuild"))?,
                project_name: env_to_str("CIGATE_BUILD_PROJECT_NAME", "node-js-test"),
                log_group_prefix: env_to_str("CIGATE_BUILD_LOG_GROUP_PREFIX", "/aws/codebuild/"),
                failure_url: env_to_str(
                    "CIGATE_BUILD_FAILURE_URL",
                    "https://console.aws.amazon.com/cloudwatch/home",
                ),
                report_console_url: env_to_str(
                    "CIGATE_BUILD_REPORT_CONSOLE_URL",
                    "https://console.aws.amazon.com/codesuite/codebuild/testReports/reports",
                ),
            },
            aws: AwsConfig {
                region: env_to_optional_str("CIGATE_AWS_REGION"),
                endpoint_url: env_to_optional_str("CIGATE_AWS_ENDPOINT_URL"),
                connect_timeout: env_to_u64("CIGATE_AWS_CONNECT_TIMEOUT", 5000),
            },
            reports: ReportsConfig {
                coverage_threshold: env_to_f64("CIGATE_REPORTS_COVERAGE_THRESHOLD", 90.0),
                badge_root_url: env_to_str(
                    "CIGATE_REPORTS_BADGE_ROOT_URL",
                    "https://img.shields.io/badge",
                ),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("CIGATE_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("CIGATE_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("CIGATE_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("CIGATE_SERVER_WORKERS_COUNT", None),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_optional_str(name: &str) -> Option<String> {
    env::var(name).ok().filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_env_no_version().unwrap();
        assert_eq!(config.build.log_group_prefix, "/aws/codebuild/");
        assert!(config.reports.coverage_threshold > 0.0);
        assert_eq!(config.version, "0.0.0");
    }
}
