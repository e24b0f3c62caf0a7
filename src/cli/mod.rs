//! Terminal interface - process arguments, the interactive form session and
//! batch rendering of draft files.

/// Interactive command implementations (form, preview, export, general)
pub mod commands;
/// TOML draft files for batch rendering
pub mod draft;
/// Line-oriented interactive loop
pub mod repl;

use crate::{
    config::AppConfig,
    core::{
        document::{InvoiceDocument, TEXT_WIDTH},
        session::InvoiceSession,
    },
    errors::Result,
    export::{pdf, print::Printed, print::print_invoice, share::send_invoice},
};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// S2M Videobooth invoice generator
#[derive(Debug, Parser)]
#[command(name = "s2m-invoice", version)]
pub struct Cli {
    /// Configuration file (overrides `INVOICE_CONFIG` and ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// What to run; defaults to the interactive form
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level modes
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fill in the invoice form line by line
    Interactive,
    /// Render an invoice from a TOML draft
    Render {
        /// Draft file
        #[arg(long)]
        draft: PathBuf,
        /// Send the invoice to the print command (or stdout)
        #[arg(long)]
        print: bool,
        /// Save the invoice as PDF in the output directory
        #[arg(long)]
        pdf: bool,
        /// Print the payment message and its deep link
        #[arg(long)]
        message: bool,
    },
    /// List the package catalog
    Packages,
}

/// State shared by every interactive command: the frozen configuration and
/// the one invoice being edited.
pub struct AppContext {
    /// Business profile, catalog and export settings
    pub config: AppConfig,
    /// The form and its editing/preview mode
    pub session: InvoiceSession,
}

impl AppContext {
    /// Creates a context with an empty form dated today.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::with_session(config, InvoiceSession::new())
    }

    /// Creates a context around an existing session.
    #[must_use]
    pub const fn with_session(config: AppConfig, session: InvoiceSession) -> Self {
        Self { config, session }
    }
}

/// Runs the selected mode to completion.
///
/// # Errors
/// Returns any error of batch rendering or of reading stdin.
pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => repl::run(AppContext::new(config)).await,
        Command::Packages => {
            println!("{}", commands::general::packages(&config.catalog));
            Ok(())
        }
        Command::Render {
            draft,
            print,
            pdf,
            message,
        } => {
            let actions = RenderActions { print, pdf, message };
            render(&draft, actions, &config).await
        }
    }
}

/// Export actions requested for a batch render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderActions {
    /// Print through the print command
    pub print: bool,
    /// Write a PDF
    pub pdf: bool,
    /// Build the message link
    pub message: bool,
}

impl RenderActions {
    const fn any(self) -> bool {
        self.print || self.pdf || self.message
    }
}

/// Loads a draft, applies the generate guard and runs the requested exports.
/// Without any action the preview text goes to stdout.
///
/// # Errors
/// Returns `Error::Draft` for a bad draft, `Error::MissingRequiredFields` if
/// the guard fails, or the first export error.
pub async fn render(
    draft_path: &std::path::Path,
    actions: RenderActions,
    config: &AppConfig,
) -> Result<()> {
    let data = draft::load_draft(draft_path, &config.catalog, Local::now().date_naive()).await?;
    let mut session = InvoiceSession::with_data(data);
    session.generate()?;

    if !actions.any() {
        let doc = InvoiceDocument::build(session.preview()?, &config.business);
        println!("{}", doc.to_text(TEXT_WIDTH));
    }
    if actions.print {
        match print_invoice(&session, config).await? {
            Printed::Stdout(text) => println!("{text}"),
            Printed::Command(command) => info!("Invoice sent to '{command}'"),
        }
    }
    if actions.pdf {
        let path = pdf::download_pdf(&session, config).await?;
        println!("{}", path.display());
    }
    if actions.message {
        let link = send_invoice(&session, config).await?;
        println!("{}\n\n{}", link.message, link.url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[test]
    fn test_cli_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["s2m-invoice"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "s2m-invoice",
            "render",
            "--draft",
            "draft.toml",
            "--pdf",
            "--config",
            "booth.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Render {
                draft: PathBuf::from("draft.toml"),
                print: false,
                pdf: true,
                message: false,
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("booth.toml")));
    }

    #[tokio::test]
    async fn test_render_writes_pdf() {
        let dir = temp_output_dir("render");
        let draft = dir.join("draft.toml");
        std::fs::write(
            &draft,
            "invoice_number = \"INV-9\"\ncustomer_name = \"Sari\"\npackage = \"silver\"\n",
        )
        .unwrap();
        let actions = RenderActions {
            pdf: true,
            ..RenderActions::default()
        };

        render(&draft, actions, &test_config(&dir)).await.unwrap();

        assert!(dir.join("Invoice-INV-9.pdf").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_render_refuses_incomplete_draft() {
        let dir = temp_output_dir("render-incomplete");
        let draft = dir.join("draft.toml");
        std::fs::write(&draft, "package = \"gold\"\n").unwrap();

        let result = render(&draft, RenderActions::default(), &test_config(&dir)).await;

        assert!(matches!(result, Err(Error::MissingRequiredFields)));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
