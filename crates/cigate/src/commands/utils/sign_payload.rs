use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use cigate_crypto::Signature;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Compute the webhook signature of a payload
#[derive(Parser)]
pub(crate) struct SignPayloadCommand {
    /// Payload file
    payload_file: PathBuf,
    /// Webhook shared secret
    #[clap(long)]
    secret: String,
}

#[async_trait]
impl Command for SignPayloadCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = tokio::fs::read(&self.payload_file).await?;
        writeln!(
            ctx.writer.write().await,
            "{}",
            Signature::compute(&payload, &self.secret)?
        )?;

        Ok(())
    }
}
