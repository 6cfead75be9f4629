//! Server module.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use cigate_aws::{load_sdk_config, CodeBuildService, SecretsManagerStore};
use cigate_build_interface::BuildService;
use cigate_build_null::NullBuildService;
use cigate_config::{ApiDriver, BuildDriver, Config, SecretsDriver};
use cigate_core::{CoreContext, CoreModule};
use cigate_ghapi_github::GithubApiService;
use cigate_ghapi_interface::ApiService;
use cigate_ghapi_null::NullApiService;
use cigate_secrets::{EnvSecretStore, SecretCache, SecretStore};
use tokio::sync::OnceCell;
use tracing::info;

use crate::{
    build::MetricsBuildService,
    events::{build_events_route, webhook_route},
    ghapi::MetricsApiService,
    health::health_check_route,
    metrics::build_metrics_handler,
    secrets::MetricsSecretStore,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
    /// Build adapter.
    pub build_service: Box<dyn BuildService>,
    /// Secret cache.
    pub secrets: Arc<SecretCache>,
}

impl AppContext {
    /// Create new app context, with the drivers selected in configuration.
    pub async fn new(config: Config, core_module: CoreModule) -> Self {
        let sdk_config = OnceCell::new();
        let load_sdk = || load_sdk_config(&config);

        let secret_store: Box<dyn SecretStore> = match config.secrets.driver {
            SecretsDriver::Env => Box::new(EnvSecretStore::new()),
            SecretsDriver::Aws => Box::new(SecretsManagerStore::new(
                sdk_config.get_or_init(load_sdk).await,
            )),
        };
        let secrets = Arc::new(SecretCache::new(Box::new(MetricsSecretStore::new(
            secret_store,
        ))));

        let api_service: Box<dyn ApiService> = match config.api.driver {
            ApiDriver::Null => Box::new(NullApiService::new()),
            ApiDriver::GitHub => Box::new(GithubApiService::new(config.clone(), secrets.clone())),
        };

        let build_service: Box<dyn BuildService> = match config.build.driver {
            BuildDriver::Null => Box::new(NullBuildService::new()),
            BuildDriver::CodeBuild => Box::new(CodeBuildService::new(
                sdk_config.get_or_init(load_sdk).await,
            )),
        };

        Self::new_with_adapters(
            config,
            core_module,
            Box::new(MetricsApiService::new(api_service)),
            Box::new(MetricsBuildService::new(build_service)),
            secrets,
        )
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService>,
        build_service: Box<dyn BuildService>,
        secrets: Arc<SecretCache>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
            build_service,
            secrets,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            build_service: self.build_service.as_ref(),
            secrets: &self.secrets,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    metrics: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(metrics)
        .wrap(Logger::default())
        .route("/webhook", web::post().to(webhook_route))
        .route("/build-events", web::post().to(build_events_route))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on cigate!"}))
            }),
        )
}

/// Run gate server.
pub async fn run_gate_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting gate server",
    );

    let workers_count = context.config.server.workers_count;
    let context = Data::new(context);
    let metrics = build_metrics_handler()?;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), metrics.clone()));
    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(address)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body, TestRequest},
    };
    use cigate_build_interface::{types::StartedBuild, MockBuildService};
    use cigate_crypto::Signature;
    use cigate_ghapi_interface::{types::GhCommitStatusState, MockApiService};
    use cigate_secrets::MockSecretStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER};

    const PAYLOAD: &str = r#"{"action": "opened", "number": 7, "repository": {"name": "repo-x"}, "pull_request": {"head": {"ref": "feature-1", "sha": "abc123"}}}"#;

    fn context(api_service: MockApiService, build_service: MockBuildService) -> Data<AppContext> {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.owner = "me".into();

        let mut store = MockSecretStore::new();
        store.expect_secret_get().returning(|_| {
            Ok(r#"{"GitPAT": "token", "GithubWebhookSecretKey": "secret"}"#.into())
        });

        Data::new(AppContext::new_with_adapters(
            config,
            CoreModule::builder().build(),
            Box::new(api_service),
            Box::new(build_service),
            Arc::new(SecretCache::new(Box::new(store))),
        ))
    }

    fn metrics() -> PrometheusMetrics {
        build_metrics_handler().unwrap()
    }

    #[actix_web::test]
    async fn webhook_dispatches_build() {
        let api_service = {
            let mut svc = MockApiService::new();
            svc.expect_commit_statuses_update()
                .once()
                .withf(|owner, name, git_ref, state, _, _, target_url| {
                    owner == "me"
                        && name == "repo-x"
                        && git_ref == "abc123"
                        && *state == GhCommitStatusState::Pending
                        && target_url == "https://logs?group=/aws/codebuild/proj&stream=77"
                })
                .return_once(|_, _, _, _, _, _, _| Ok(()));
            svc
        };
        let build_service = {
            let mut svc = MockBuildService::new();
            svc.expect_builds_start().once().return_once(|_, _| {
                Ok(StartedBuild {
                    id: "proj:77".into(),
                    log_deep_link: "https://logs?group=null&stream=null".into(),
                })
            });
            svc
        };

        let app = init_service(build_actix_app(
            context(api_service, build_service),
            metrics(),
        ))
        .await;
        let req = TestRequest::post()
            .uri("/webhook")
            .insert_header((GITHUB_EVENT_HEADER, "pull_request"))
            .insert_header((
                GITHUB_SIGNATURE_HEADER,
                Signature::compute(PAYLOAD.as_bytes(), "secret").unwrap(),
            ))
            .set_payload(PAYLOAD)
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );

        let body = read_body(resp).await;
        assert_eq!(
            body,
            r#"{"id":"proj:77","logDeepLink":"https://logs?group=null&stream=null"}"#
        );
    }

    #[actix_web::test]
    async fn webhook_with_bad_signature_is_still_ok() {
        let app = init_service(build_actix_app(
            context(MockApiService::new(), MockBuildService::new()),
            metrics(),
        ))
        .await;
        let req = TestRequest::post()
            .uri("/webhook")
            .insert_header((GITHUB_EVENT_HEADER, "pull_request"))
            .insert_header((GITHUB_SIGNATURE_HEADER, "sha1=0000"))
            .set_payload(PAYLOAD)
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await, "\"Invalid Request\"");
    }

    #[actix_web::test]
    async fn build_event_with_invalid_payload_is_still_ok() {
        let app = init_service(build_actix_app(
            context(MockApiService::new(), MockBuildService::new()),
            metrics(),
        ))
        .await;
        let req = TestRequest::post()
            .uri("/build-events")
            .set_payload("{}")
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert!(body.starts_with(b"\"Could not parse event:"));
    }

    #[actix_web::test]
    async fn health() {
        let app = init_service(build_actix_app(
            context(MockApiService::new(), MockBuildService::new()),
            metrics(),
        ))
        .await;
        let req = TestRequest::get().uri("/health").to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn bind_address() {
        let mut config = Config::from_env_no_version().unwrap();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 8080;
        assert_eq!(get_bind_address(&config), "0.0.0.0:8080");
    }
}
