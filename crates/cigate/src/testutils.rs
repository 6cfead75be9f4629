use std::{io::Write, sync::Arc};

use cigate_build_interface::MockBuildService;
use cigate_config::Config;
use cigate_core::CoreModule;
use cigate_ghapi_interface::MockApiService;
use cigate_secrets::{MockSecretStore, SecretCache};
use clap::Parser;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub build_service: MockBuildService,
    pub secret_store: MockSecretStore,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut secret_store = MockSecretStore::new();
        secret_store.expect_secret_get().returning(|_| {
            Ok(r#"{"GitPAT": "token", "GithubWebhookSecretKey": "secret"}"#.into())
        });

        Self {
            config: Config::from_env_no_version().unwrap(),
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            build_service: MockBuildService::new(),
            secret_store,
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            build_service: Box::new(self.build_service),
            secrets: Arc::new(SecretCache::new(Box::new(self.secret_store))),
            writer,
        }
    }
}

pub(crate) async fn write_event_file(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(format!("cigate-{}-{name}", std::process::id()));
    tokio::fs::write(&path, content).await.unwrap();
    path.to_string_lossy().into_owned()
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["cigate"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
