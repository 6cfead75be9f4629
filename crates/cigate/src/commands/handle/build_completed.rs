use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use cigate_core::handlers::handle_build_completed_event;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Handle a build state change notification
#[derive(Parser)]
pub(crate) struct HandleBuildCompletedCommand {
    /// Event file
    #[clap(long)]
    event: PathBuf,
}

#[async_trait]
impl Command for HandleBuildCompletedCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = tokio::fs::read(&self.event).await?;

        let response = handle_build_completed_event(&ctx.as_core_context(), &payload).await;
        writeln!(
            ctx.writer.write().await,
            "{}",
            serde_json::to_string_pretty(&response)?
        )?;

        Ok(())
    }
}
