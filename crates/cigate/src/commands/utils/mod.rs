//! Utils commands.

mod sign_payload;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::sign_payload::SignPayloadCommand;
use super::{Command, CommandContext};
use crate::Result;

/// Utils related commands
#[derive(Parser)]
pub(crate) struct UtilsCommand {
    #[clap(subcommand)]
    inner: UtilsSubCommand,
}

#[async_trait]
impl Command for UtilsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum UtilsSubCommand {
    SignPayload(SignPayloadCommand),
}

#[async_trait]
impl Command for UtilsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::SignPayload(sub) => sub.execute(ctx).await,
        }
    }
}
