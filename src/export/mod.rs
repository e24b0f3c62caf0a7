//! Export actions available from the invoice preview.
//!
//! Each action reads the previewed record through
//! `InvoiceSession::preview`, so none of them can run while the form is
//! being edited, and none of them changes the session.

/// PDF download
pub mod pdf;
/// Printable layout and print command
pub mod print;
/// Message body and deep link delivery
pub mod share;

use crate::{
    config::export::split_command,
    errors::{Error, Result},
};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Runs a configured external command, optionally feeding `stdin`.
///
/// # Errors
/// Returns `Error::Export` if the command is blank, cannot be spawned, or
/// exits unsuccessfully.
pub(crate) async fn run_command(command: &str, extra_args: &[&str], stdin: Option<&[u8]>) -> Result<()> {
    let (program, mut args) = split_command(command).ok_or_else(|| Error::Export {
        message: "Configured command is empty".to_string(),
    })?;
    args.extend(extra_args.iter().map(|a| (*a).to_string()));
    debug!(%program, ?args, "Running export command");

    let mut child = tokio::process::Command::new(&program)
        .args(&args)
        .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
        .spawn()
        .map_err(|e| Error::Export {
            message: format!("Failed to start '{program}': {e}"),
        })?;

    // A command that exits early closes its stdin; it is still waited on
    let mut write_result = Ok(());
    if let (Some(bytes), Some(mut pipe)) = (stdin, child.stdin.take()) {
        write_result = pipe.write_all(bytes).await;
        // Closing stdin lets the command see end of input
        drop(pipe);
    }

    let status = child.wait().await.map_err(|e| Error::Export {
        message: format!("Failed to wait for '{program}': {e}"),
    })?;
    if !status.success() {
        return Err(Error::Export {
            message: format!("'{program}' exited with {status}"),
        });
    }
    write_result.map_err(|e| Error::Export {
        message: format!("Failed to write to '{program}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_command_rejects_blank() {
        let result = run_command("  ", &[], None).await;
        assert!(matches!(result, Err(Error::Export { .. })));
    }

    #[tokio::test]
    async fn test_run_command_missing_program() {
        let result = run_command("s2m-invoice-no-such-program", &[], None).await;
        assert!(matches!(result, Err(Error::Export { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_early_exit_with_pending_stdin() {
        // `false` never reads its input, so a large write may hit a closed pipe
        let input = vec![b'x'; 1 << 20];
        let result = run_command("false", &[], Some(&input)).await;
        assert!(matches!(result, Err(Error::Export { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_reader_that_exits_cleanly() {
        // `true` exits 0 without reading; a broken pipe is still an export error
        let input = vec![b'x'; 1 << 20];
        match run_command("true", &[], Some(&input)).await {
            Ok(()) | Err(Error::Export { .. }) => {}
            Err(e) => panic!("unexpected error kind: {e}"),
        }
    }
}
