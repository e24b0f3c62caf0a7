//! Form editing commands. All of them are refused while previewing.

use super::{Reply, ServiceAction, StatusArg};
use crate::{
    cli::AppContext,
    core::{
        format::format_currency,
        invoice::{self, FormField},
    },
    entities::PaymentStatus,
    errors::Result,
};

/// `set <field> <value…>`
pub fn set(ctx: &mut AppContext, field: &str, value: &str) -> Result<Reply> {
    let field: FormField = field.parse()?;
    invoice::set_field(ctx.session.form()?, field, value)?;
    Ok(Reply::text("OK"))
}

/// `package <id>` or `package none`
pub fn package(ctx: &mut AppContext, id: &str) -> Result<Reply> {
    let data = ctx.session.form()?;
    if id.eq_ignore_ascii_case("none") {
        invoice::clear_package(data);
        return Ok(Reply::text("Paket dikosongkan"));
    }
    let package = invoice::select_package(data, &ctx.config.catalog, id)?;
    Ok(Reply::text(format!(
        "Paket {} ({}) - {}",
        package.name,
        package.duration,
        format_currency(package.price)
    )))
}

/// `status paid|unpaid`
pub fn status(ctx: &mut AppContext, status: StatusArg) -> Result<Reply> {
    let status = match status {
        StatusArg::Paid => PaymentStatus::Paid,
        StatusArg::Unpaid => PaymentStatus::Unpaid,
    };
    invoice::set_payment_status(ctx.session.form()?, status);
    Ok(Reply::text(format!("Status: {}", status.label())))
}

/// `service add|name|price|remove …`
pub fn service(ctx: &mut AppContext, action: ServiceAction) -> Result<Reply> {
    let data = ctx.session.form()?;
    match action {
        ServiceAction::Add => {
            let index = invoice::add_service(data);
            Ok(Reply::text(format!("Layanan tambahan #{index} ditambahkan")))
        }
        ServiceAction::Name { index, name } => {
            invoice::set_service_name(data, index, &name.join(" "))?;
            Ok(Reply::text("OK"))
        }
        ServiceAction::Price { index, price } => {
            let price = invoice::parse_amount(&price)?;
            invoice::set_service_price(data, index, price)?;
            Ok(Reply::text("OK"))
        }
        ServiceAction::Remove { index } => {
            let removed = invoice::remove_service(data, index)?;
            Ok(Reply::text(format!("Layanan '{}' dihapus", removed.name)))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::cli::commands::{execute, parse_line};
    use crate::config::AppConfig;
    use crate::core::pricing::Totals;
    use crate::errors::Error;
    use crate::test_utils::*;

    async fn run(ctx: &mut AppContext, line: &str) -> Result<Reply> {
        execute(ctx, parse_line(line).unwrap()).await
    }

    #[tokio::test]
    async fn test_fill_form_reaches_gold_totals() -> Result<()> {
        let mut ctx = AppContext::new(test_config(&temp_output_dir("form")));

        for line in [
            "set customer Budi Santoso",
            "package gold",
            "service add",
            "service name 0 Dekorasi",
            "service price 0 300.000",
            "set discount 10",
            "set shipping 50000",
            "set dp 500000",
        ] {
            run(&mut ctx, line).await?;
        }

        let totals = Totals::compute(ctx.session.data());
        assert_eq!(totals.subtotal, 1_800_000);
        assert_eq!(totals.discount, 180_000);
        assert_eq!(totals.grand_total, 1_670_000);
        assert_eq!(totals.remaining_balance, 1_170_000);
        assert_eq!(ctx.session.data().customer_name, "Budi Santoso");
        Ok(())
    }

    #[tokio::test]
    async fn test_package_none_and_unknown() {
        let mut ctx = AppContext::with_session(AppConfig::default(), gold_session());

        let reply = run(&mut ctx, "package none").await.unwrap();
        assert_eq!(reply.text, "Paket dikosongkan");
        assert!(ctx.session.data().selected_package.is_none());

        let result = run(&mut ctx, "package platinum").await;
        assert!(matches!(result, Err(Error::PackageNotFound { .. })));
    }

    #[tokio::test]
    async fn test_edits_refused_while_previewing() {
        let mut ctx = AppContext::with_session(AppConfig::default(), previewing_session());
        let before = ctx.session.data().clone();

        for line in ["set customer Someone", "package silver", "service add", "status paid"] {
            let result = run(&mut ctx, line).await;
            assert!(matches!(result, Err(Error::NotEditing)), "{line}");
        }
        assert_eq!(ctx.session.data(), &before);
    }

    #[tokio::test]
    async fn test_status_and_remove() {
        let mut ctx = AppContext::with_session(AppConfig::default(), gold_session());

        run(&mut ctx, "status paid").await.unwrap();
        assert_eq!(ctx.session.data().payment_status, PaymentStatus::Paid);

        let reply = run(&mut ctx, "service remove 0").await.unwrap();
        assert_eq!(reply.text, "Layanan 'Dekorasi' dihapus");
        assert!(ctx.session.data().additional_services.is_empty());
    }
}
