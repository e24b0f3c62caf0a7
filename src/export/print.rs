//! Print action - the printable plain-text layout of the invoice.
//!
//! With `export.print_command` set (e.g., `lp`), the layout is piped to that
//! command. Otherwise it is handed back for the caller to show on stdout.

use crate::{
    config::AppConfig,
    core::{
        document::{InvoiceDocument, TEXT_WIDTH},
        session::InvoiceSession,
    },
    errors::Result,
};
use tracing::info;

/// Where the printout went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printed {
    /// Piped to the configured print command
    Command(String),
    /// No print command configured; the layout to display
    Stdout(String),
}

/// Renders the previewed invoice as printable text.
///
/// # Errors
/// Returns `Error::NotPreviewing` outside the preview.
pub fn printable_text(session: &InvoiceSession, config: &AppConfig) -> Result<String> {
    let data = session.preview()?;
    Ok(InvoiceDocument::build(data, &config.business).to_text(TEXT_WIDTH))
}

/// Prints the previewed invoice.
///
/// # Errors
/// Returns `Error::NotPreviewing` outside the preview or `Error::Export` if
/// the print command fails.
pub async fn print_invoice(session: &InvoiceSession, config: &AppConfig) -> Result<Printed> {
    let text = printable_text(session, config)?;
    match config.export.print_command.as_deref() {
        Some(command) if !command.trim().is_empty() => {
            super::run_command(command, &[], Some(text.as_bytes())).await?;
            info!(%command, "Invoice sent to printer");
            Ok(Printed::Command(command.to_string()))
        }
        _ => Ok(Printed::Stdout(text)),
    }
}
