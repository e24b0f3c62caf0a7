//! Export commands. Failures are logged here and shown to the user as a
//! short notice; the session stays in the preview so the action can be
//! retried.

use super::Reply;
use crate::{
    cli::AppContext,
    errors::{Error, Result},
    export::{pdf, print::Printed, print::print_invoice, share::send_invoice},
};
use tracing::error;

/// `print`
pub async fn print(ctx: &mut AppContext) -> Result<Reply> {
    match print_invoice(&ctx.session, &ctx.config).await {
        Ok(Printed::Stdout(text)) => Ok(Reply::text(text)),
        Ok(Printed::Command(command)) => Ok(Reply::text(format!("Invoice dikirim ke '{command}'"))),
        Err(Error::NotPreviewing) => Err(Error::NotPreviewing),
        Err(e) => {
            error!("Error printing invoice: {e}");
            Ok(Reply::text("Terjadi kesalahan saat mencetak invoice"))
        }
    }
}

/// `download`
pub async fn download(ctx: &mut AppContext) -> Result<Reply> {
    match pdf::download_pdf(&ctx.session, &ctx.config).await {
        Ok(path) => Ok(Reply::text(format!("PDF tersimpan: {}", path.display()))),
        Err(Error::NotPreviewing) => Err(Error::NotPreviewing),
        Err(e) => {
            error!("Error generating PDF: {e}");
            Ok(Reply::text("Terjadi kesalahan saat membuat PDF"))
        }
    }
}

/// `send`
pub async fn send(ctx: &mut AppContext) -> Result<Reply> {
    match send_invoice(&ctx.session, &ctx.config).await {
        Ok(link) if link.opened => Ok(Reply::text(format!("Link dibuka:\n{}", link.url))),
        Ok(link) => Ok(Reply::text(format!(
            "{}\n\nBuka link berikut untuk mengirim pesan:\n{}",
            link.message, link.url
        ))),
        Err(Error::NotPreviewing) => Err(Error::NotPreviewing),
        Err(e) => {
            error!("Error opening message link: {e}");
            Ok(Reply::text("Terjadi kesalahan saat membuka link pesan"))
        }
    }
}
