//! Interactive commands, one per input line, organised by category.
//!
//! Every handler returns the text to show instead of printing it, so the
//! whole form flow can be driven from tests.

/// Export commands (print, download, send)
pub mod export;
/// Form editing commands
pub mod form;
/// General commands (help, packages)
pub mod general;
/// Generate, back and show
pub mod preview;

use super::AppContext;
use crate::errors::Result;
use clap::{Parser, Subcommand, ValueEnum};

/// Payment status as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Fully paid
    #[value(alias = "lunas")]
    Paid,
    /// Not yet fully paid
    #[value(alias = "belum-lunas", alias = "belum_lunas")]
    Unpaid,
}

/// Operations on the additional services list
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ServiceAction {
    /// Append an empty service
    Add,
    /// Rename the service at INDEX
    Name {
        /// Position in the list, starting at 0
        index: usize,
        /// New name
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Reprice the service at INDEX
    Price {
        /// Position in the list, starting at 0
        index: usize,
        /// New price in rupiah
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Remove the service at INDEX
    Remove {
        /// Position in the list, starting at 0
        index: usize,
    },
}

/// One line typed into the interactive session
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ReplCommand {
    /// Set a form field: number, date, customer, phone, address, event-date,
    /// event-type, discount, shipping, dp, notes
    Set {
        /// Field name
        field: String,
        /// New value; empty clears text and dates and zeroes numbers
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Select a package by id, or `none` to clear it
    Package {
        /// Package id from the catalog
        id: String,
    },
    /// Set the payment status
    Status {
        /// paid or unpaid
        status: StatusArg,
    },
    /// Edit additional services
    Service {
        /// What to do
        #[command(subcommand)]
        action: ServiceAction,
    },
    /// Show the form with live totals
    Show,
    /// Validate and switch to the invoice preview
    Generate,
    /// Return from the preview to the form
    Back,
    /// Print the previewed invoice
    Print,
    /// Save the previewed invoice as PDF
    Download,
    /// Build the message link for the previewed invoice
    Send,
    /// List the package catalog
    Packages,
    /// Show the command list
    Help,
    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

/// Parser wrapper for a single input line
#[derive(Debug, Parser)]
#[command(
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    /// The command on this line
    #[command(subcommand)]
    pub command: ReplCommand,
}

/// What a command asks the interactive loop to show and do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text for the user, may be empty
    pub text: String,
    /// Whether the session should end
    pub quit: bool,
}

impl Reply {
    /// A reply that keeps the session going.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    /// A reply that ends the session.
    #[must_use]
    pub fn quit() -> Self {
        Self {
            text: String::new(),
            quit: true,
        }
    }
}

/// Parses one input line.
///
/// # Errors
/// Returns clap's error, whose rendering explains the mistake.
pub fn parse_line(line: &str) -> std::result::Result<ReplCommand, clap::Error> {
    ReplLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

/// Runs one command against the session.
///
/// # Errors
/// Returns the error of the underlying operation; the session is left as it
/// was before the command.
pub async fn execute(ctx: &mut AppContext, command: ReplCommand) -> Result<Reply> {
    match command {
        ReplCommand::Set { field, value } => form::set(ctx, &field, &value.join(" ")),
        ReplCommand::Package { id } => form::package(ctx, &id),
        ReplCommand::Status { status } => form::status(ctx, status),
        ReplCommand::Service { action } => form::service(ctx, action),
        ReplCommand::Show => Ok(preview::show(ctx)),
        ReplCommand::Generate => preview::generate(ctx),
        ReplCommand::Back => Ok(preview::back(ctx)),
        ReplCommand::Print => export::print(ctx).await,
        ReplCommand::Download => export::download(ctx).await,
        ReplCommand::Send => export::send(ctx).await,
        ReplCommand::Packages => Ok(Reply::text(general::packages(&ctx.config.catalog))),
        ReplCommand::Help => Ok(Reply::text(general::help())),
        ReplCommand::Quit => Ok(Reply::quit()),
    }
}
