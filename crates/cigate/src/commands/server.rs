use async_trait::async_trait;
use cigate_server::server::{run_gate_server, AppContext};
use clap::Parser;

use super::{Command, CommandContext};
use crate::Result;

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let context = AppContext::new_with_adapters(
                ctx.config,
                ctx.core_module,
                ctx.api_service,
                ctx.build_service,
                ctx.secrets,
            );

            run_gate_server(context).await
        })
        .await??;

        Ok(())
    }
}
