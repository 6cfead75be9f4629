//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use cigate_build_interface::BuildService;
use cigate_config::Config;
use cigate_core::{CoreContext, CoreModule};
use cigate_ghapi_interface::ApiService;
use cigate_secrets::SecretCache;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{handle::HandleCommand, server::ServerCommand, utils::UtilsCommand};
use crate::Result;

mod handle;
mod server;
mod utils;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService>,
    pub build_service: Box<dyn BuildService>,
    pub secrets: Arc<SecretCache>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
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

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Handle(HandleCommand),
    Utils(UtilsCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Handle(sub) => sub.execute(ctx).await,
            Self::Utils(sub) => sub.execute(ctx).await,
        }
    }
}
