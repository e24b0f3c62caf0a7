//! Send action - the invoice message as a messaging deep link.

use crate::{
    config::AppConfig,
    core::{
        message::{build_deep_link, build_message},
        session::InvoiceSession,
    },
    errors::Result,
};
use tracing::{info, warn};

/// The message and link produced for the previewed invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Plain-text message body
    pub message: String,
    /// Deep link with the encoded body
    pub url: String,
    /// Whether the configured open command launched the link
    pub opened: bool,
}

/// Builds the message and deep link without opening anything.
///
/// # Errors
/// Returns `Error::NotPreviewing` outside the preview.
pub fn share_link(session: &InvoiceSession, config: &AppConfig) -> Result<ShareLink> {
    let data = session.preview()?;
    if data.customer_phone.chars().all(|c| !c.is_ascii_digit()) {
        warn!("Customer phone has no digits; the link will not target a chat");
    }
    let message = build_message(data, &config.business);
    let url = build_deep_link(&config.export.messaging_base_url, &data.customer_phone, &message);
    Ok(ShareLink {
        message,
        url,
        opened: false,
    })
}

/// Builds the deep link and opens it with `export.open_command` when set.
///
/// # Errors
/// Returns `Error::NotPreviewing` outside the preview or `Error::Export` if
/// the open command fails.
pub async fn send_invoice(session: &InvoiceSession, config: &AppConfig) -> Result<ShareLink> {
    let mut link = share_link(session, config)?;
    if let Some(command) = config
        .export
        .open_command
        .as_deref()
        .filter(|c| !c.trim().is_empty())
    {
        super::run_command(command, &[link.url.as_str()], None).await?;
        link.opened = true;
        info!(%command, "Message link opened");
    }
    Ok(link)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[test]
    fn test_share_link_targets_customer_phone() {
        let config = AppConfig::default();
        let session = previewing_session();

        let link = share_link(&session, &config).unwrap();

        assert!(link.url.starts_with("https://wa.me/081234567890?text="));
        assert!(link.url.contains("Budi%20Santoso"));
        assert!(!link.url.contains(' '));
        assert!(link.message.contains("Customer: Budi Santoso"));
    }

    #[test]
    fn test_share_link_requires_preview() {
        let config = AppConfig::default();
        assert!(matches!(
            share_link(&gold_session(), &config),
            Err(Error::NotPreviewing)
        ));
    }

    #[tokio::test]
    async fn test_send_without_open_command_only_builds_link() {
        let config = AppConfig::default();
        let link = send_invoice(&previewing_session(), &config).await.unwrap();
        assert!(!link.opened);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_send_runs_open_command() {
        let mut config = AppConfig::default();
        config.export.open_command = Some("true".to_string());
        let link = send_invoice(&previewing_session(), &config).await.unwrap();
        assert!(link.opened);
    }
}
