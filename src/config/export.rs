//! Export settings: where PDFs go and which external commands deliver
//! printouts and deep links.

use serde::Deserialize;
use std::path::PathBuf;

/// Default messaging service used for the send action
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Settings for the print, download and send actions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the PDF is written into
    pub output_dir: PathBuf,
    /// Command that receives the printable invoice on stdin (e.g., `lp`).
    /// When unset the printable layout goes to stdout.
    pub print_command: Option<String>,
    /// Command used to open the message deep link (e.g., `xdg-open`).
    /// When unset the link is only printed.
    pub open_command: Option<String>,
    /// Base URL of the messaging service, without a trailing slash
    pub messaging_base_url: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            print_command: None,
            open_command: None,
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
        }
    }
}

/// Splits a configured command line into program and arguments.
///
/// Returns `None` for a blank command.
#[must_use]
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}
