//! Mode commands: `generate`, `back` and `show`.

use super::Reply;
use crate::{
    cli::AppContext,
    core::{
        document::{InvoiceDocument, TEXT_WIDTH},
        format::{format_currency, format_date, or_dash},
        pricing::Totals,
        session::Mode,
    },
    errors::Result,
};
use std::fmt::Write as _;

/// `generate` - switch to the preview and show the invoice.
pub fn generate(ctx: &mut AppContext) -> Result<Reply> {
    ctx.session.generate()?;
    let doc = InvoiceDocument::build(ctx.session.data(), &ctx.config.business);
    let mut text = doc.to_text(TEXT_WIDTH);
    text.push_str("\n[back] kembali ke form | [print] | [download] PDF | [send] kirim pesan");
    Ok(Reply::text(text))
}

/// `back` - return to the form; always succeeds.
pub fn back(ctx: &mut AppContext) -> Reply {
    ctx.session.back_to_form();
    Reply::text("Kembali ke form")
}

/// `show` - the current form values with live totals, in either mode.
pub fn show(ctx: &AppContext) -> Reply {
    let data = ctx.session.data();
    let totals = Totals::compute(data);
    let mode = match ctx.session.mode() {
        Mode::Editing => "editing",
        Mode::Previewing => "preview",
    };

    let mut out = String::new();
    // `write!` into a String cannot fail
    let _ = writeln!(out, "Mode: {mode}");
    let _ = writeln!(out, "No. Invoice:     {}", or_dash(&data.invoice_number));
    let _ = writeln!(out, "Tanggal Invoice: {}", format_date(data.date));
    let _ = writeln!(out, "Customer:        {}", or_dash(&data.customer_name));
    let _ = writeln!(out, "Telepon:         {}", or_dash(&data.customer_phone));
    let _ = writeln!(out, "Alamat:          {}", or_dash(&data.customer_address));
    let _ = writeln!(out, "Tanggal Event:   {}", format_date(data.event_date));
    let _ = writeln!(out, "Jenis Event:     {}", or_dash(&data.event_location));
    let package = data.selected_package.as_ref().map_or_else(
        || "-".to_string(),
        |p| format!("{} ({}) {}", p.name, p.duration, format_currency(p.price)),
    );
    let _ = writeln!(out, "Paket:           {package}");
    for (i, service) in data.additional_services.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{i}] {}: {}",
            or_dash(&service.name),
            format_currency(service.price)
        );
    }
    let _ = writeln!(out, "Diskon:          {}%", data.discount_percent);
    let _ = writeln!(out, "Ongkos Kirim:    {}", format_currency(data.shipping_cost));
    let _ = writeln!(out, "DP:              {}", format_currency(data.dp_amount));
    let _ = writeln!(out, "Status:          {}", data.payment_status.label());
    let _ = writeln!(out, "Catatan:         {}", or_dash(&data.notes));
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "Subtotal:          {}", format_currency(totals.subtotal));
    let _ = writeln!(out, "Diskon:            {}", format_currency(totals.discount));
    let _ = writeln!(out, "Total Keseluruhan: {}", format_currency(totals.grand_total));
    let _ = write!(
        out,
        "{}: {}",
        totals.amount_due_label(),
        format_currency(totals.amount_due())
    );

    Reply::text(out)
}
