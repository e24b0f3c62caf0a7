//! Interactive loop: one command per stdin line, replies on stdout.

use super::{
    AppContext,
    commands::{self, Reply, general},
};
use crate::errors::Result;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const PROMPT: &str = "> ";

/// Handles one input line. Parse and command errors become the reply text
/// so the session keeps going.
pub async fn handle_line(ctx: &mut AppContext, line: &str) -> Reply {
    let line = line.trim();
    if line.is_empty() {
        return Reply::text("");
    }
    match commands::parse_line(line) {
        Ok(command) => commands::execute(ctx, command)
            .await
            .unwrap_or_else(|e| {
                debug!("Command '{line}' failed: {e}");
                Reply::text(format!("❌ {e}"))
            }),
        Err(e) => Reply::text(e.render().to_string().trim_end().to_string()),
    }
}

async fn write_reply<W: AsyncWrite + Unpin>(out: &mut W, reply: &Reply) -> Result<()> {
    if !reply.text.is_empty() {
        out.write_all(reply.text.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    if !reply.quit {
        out.write_all(PROMPT.as_bytes()).await?;
    }
    out.flush().await?;
    Ok(())
}

/// Reads commands from stdin until `quit` or end of input. The form is
/// discarded on exit.
///
/// # Errors
/// Returns `Error::Io` if stdin or stdout fail.
pub async fn run(mut ctx: AppContext) -> Result<()> {
    info!("Interactive session started");
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_reply(
        &mut stdout,
        &Reply::text(format!("{}\n\n{}", general::help(), general::packages(&ctx.config.catalog))),
    )
    .await?;

    while let Some(line) = lines.next_line().await? {
        let reply = handle_line(&mut ctx, &line).await;
        write_reply(&mut stdout, &reply).await?;
        if reply.quit {
            break;
        }
    }

    info!("Interactive session ended");
    Ok(())
}
