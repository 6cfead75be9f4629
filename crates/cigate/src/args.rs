use std::sync::Arc;

use cigate_config::Config;
use cigate_core::CoreModule;
use cigate_server::server::AppContext;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            info!(
                api_driver = ?config.api.driver,
                build_driver = ?config.build.driver,
                secrets_driver = ?config.secrets.driver,
                message = "Selecting drivers"
            );

            let AppContext {
                config,
                core_module,
                api_service,
                build_service,
                secrets,
            } = AppContext::new(config, CoreModule::builder().build()).await;

            let ctx = CommandContext {
                config,
                core_module,
                api_service,
                build_service,
                secrets,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
