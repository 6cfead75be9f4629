use cigate_build_interface::BuildService;
use cigate_config::Config;
use cigate_ghapi_interface::ApiService;
use cigate_secrets::SecretCache;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub build_service: &'a (dyn BuildService + 'a),
    pub secrets: &'a SecretCache,
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use cigate_build_interface::MockBuildService;
    use cigate_config::Config;
    use cigate_ghapi_interface::MockApiService;
    use cigate_secrets::{MockSecretStore, SecretCache};

    use crate::{CoreContext, CoreModule};

    pub const WEBHOOK_SECRET: &str = "secret";

    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub build_service: MockBuildService,
        pub secrets: SecretCache,
    }

    impl CoreContextTest {
        /// Test context with default configuration, empty mocks, and a secret
        /// store holding [`WEBHOOK_SECRET`] and a dummy token.
        pub fn new() -> Self {
            let mut store = MockSecretStore::new();
            store.expect_secret_get().returning(|_| {
                Ok(format!(
                    r#"{{"GitPAT": "token", "GithubWebhookSecretKey": "{WEBHOOK_SECRET}"}}"#
                ))
            });

            Self {
                config: test_config(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                build_service: MockBuildService::new(),
                secrets: SecretCache::new(Box::new(store)),
            }
        }

        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                build_service: &self.build_service,
                secrets: &self.secrets,
            }
        }
    }

    fn test_config() -> Config {
        let mut config = match Config::from_env_no_version() {
            Ok(config) => config,
            Err(e) => panic!("invalid test environment: {e}"),
        };

        config.api.github.owner = "me".into();
        config.build.project_name = "proj".into();
        config.reports.coverage_threshold = 90.0;
        config
    }
}
