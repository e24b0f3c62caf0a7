//! Plain-text invoice message and the messaging deep link that carries it.
//!
//! Section order is fixed: header, services, payment summary, payment
//! status, notes, contact footer. Discount, shipping, down payment and notes
//! lines only appear when their value is present.

use crate::{
    config::BusinessProfile,
    core::{
        format::{format_currency, format_date, format_deduction, or_dash},
        pricing::Totals,
    },
    entities::InvoiceData,
};
use std::fmt::Write as _;

const DIVIDER: &str = "--------------------------------";

/// Builds the multi-line message body for `data`.
#[must_use]
pub fn build_message(data: &InvoiceData, business: &BusinessProfile) -> String {
    let totals = Totals::compute(data);
    let mut msg = String::new();

    // `write!` into a String cannot fail
    let _ = writeln!(msg, "*INVOICE {}*", business.name);
    let _ = writeln!(msg, "{DIVIDER}");
    let _ = writeln!(msg, "No. Invoice: #{}", data.invoice_number);
    let _ = writeln!(msg, "Customer: {}", data.customer_name);
    let _ = writeln!(msg, "Tanggal Event: {}", format_date(data.event_date));
    let _ = writeln!(msg, "Jenis Event: {}", or_dash(&data.event_location));

    let _ = writeln!(msg, "\n*DETAIL LAYANAN*");
    if let Some(package) = &data.selected_package {
        let _ = writeln!(
            msg,
            "- Paket {} ({}): {}",
            package.name,
            package.duration,
            format_currency(package.price)
        );
    }
    for service in &data.additional_services {
        let _ = writeln!(msg, "- {}: {}", or_dash(&service.name), format_currency(service.price));
    }

    let _ = writeln!(msg, "\n*RINCIAN PEMBAYARAN*");
    let _ = writeln!(msg, "Subtotal: {}", format_currency(totals.subtotal));
    if data.discount_percent > 0 {
        let _ = writeln!(
            msg,
            "Diskon ({}%): {}",
            data.discount_percent,
            format_deduction(totals.discount)
        );
    }
    if data.shipping_cost > 0 {
        let _ = writeln!(msg, "Ongkos Kirim: {}", format_currency(data.shipping_cost));
    }
    let _ = writeln!(msg, "*Total Keseluruhan: {}*", format_currency(totals.grand_total));
    if totals.has_down_payment {
        let _ = writeln!(msg, "DP (Down Payment): {}", format_deduction(data.dp_amount));
        let _ = writeln!(
            msg,
            "*Sisa Pembayaran: {}*",
            format_currency(totals.remaining_balance)
        );
    }

    let _ = writeln!(msg, "\nStatus: *{}*", data.payment_status.label());

    if !data.notes.is_empty() {
        let _ = writeln!(msg, "\n*CATATAN*");
        let _ = writeln!(msg, "{}", data.notes.trim_end());
    }

    let _ = writeln!(msg, "\n{DIVIDER}");
    let _ = writeln!(msg, "*{}*", business.name);
    let _ = writeln!(msg, "Telp/WA: {}", business.phone);
    let _ = writeln!(msg, "Instagram: {}", business.instagram);
    let _ = write!(msg, "Email: {}", business.email);

    msg
}

/// Keeps only the ASCII digits of a phone number.
#[must_use]
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Percent-encodes `input` the way `encodeURIComponent` does: everything
/// except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` of its UTF-8 bytes.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Builds `<base_url>/<phone digits>?text=<encoded body>`.
#[must_use]
pub fn build_deep_link(base_url: &str, phone: &str, body: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        phone_digits(phone),
        encode_uri_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PaymentStatus;
    use crate::test_utils::*;

    fn business() -> BusinessProfile {
        BusinessProfile::default()
    }

    #[test]
    fn test_full_message_sections_in_order() {
        let mut data = gold_invoice();
        data.notes = "Datang 2 jam sebelum acara".to_string();
        let msg = build_message(&data, &business());

        let order = [
            "*INVOICE S2M Videobooth 360*",
            "No. Invoice: #INV-001",
            "Customer: Budi Santoso",
            "Tanggal Event: 7 November 2026",
            "Jenis Event: Resepsi nikah",
            "*DETAIL LAYANAN*",
            "- Paket GOLD (5 Jam): Rp 1.500.000",
            "- Dekorasi: Rp 300.000",
            "*RINCIAN PEMBAYARAN*",
            "Subtotal: Rp 1.800.000",
            "Diskon (10%): -Rp 180.000",
            "Ongkos Kirim: Rp 50.000",
            "*Total Keseluruhan: Rp 1.670.000*",
            "DP (Down Payment): -Rp 500.000",
            "*Sisa Pembayaran: Rp 1.170.000*",
            "Status: *BELUM LUNAS*",
            "*CATATAN*",
            "Datang 2 jam sebelum acara",
            "Telp/WA: 0812-1111-4522",
            "Instagram: @s2m_videobooth360",
            "Email: official.s2mproduction@gmail.com",
        ];
        let mut last = 0;
        for needle in order {
            let pos = msg[last..].find(needle).map(|p| p + last);
            assert!(pos.is_some(), "missing or out of order: {needle}");
            last = pos.unwrap_or(last);
        }
    }

    #[test]
    fn test_conditional_lines_omitted() {
        let mut data = gold_invoice();
        data.discount_percent = 0;
        data.shipping_cost = 0;
        data.dp_amount = 0;
        data.payment_status = PaymentStatus::Paid;
        let msg = build_message(&data, &business());

        assert!(!msg.contains("Diskon"));
        assert!(!msg.contains("Ongkos Kirim"));
        assert!(!msg.contains("DP (Down Payment)"));
        assert!(!msg.contains("Sisa Pembayaran"));
        assert!(!msg.contains("*CATATAN*"));
        assert!(msg.contains("*Total Keseluruhan: Rp 1.800.000*"));
        assert!(msg.contains("Status: *LUNAS*"));
    }

    #[test]
    fn test_missing_event_fields_use_placeholder() {
        let mut data = gold_invoice();
        data.event_date = None;
        data.event_location.clear();
        let msg = build_message(&data, &business());

        assert!(msg.contains("Tanggal Event: -"));
        assert!(msg.contains("Jenis Event: -"));
    }

    #[test]
    fn test_negative_remaining_balance_in_message() {
        let mut data = empty_invoice();
        data.customer_name = "Rina".to_string();
        data.additional_services.push(service("Sewa", 1_000_000));
        data.dp_amount = 1_200_000;
        let msg = build_message(&data, &business());

        assert!(msg.contains("*Sisa Pembayaran: -Rp 200.000*"));
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(phone_digits("0812-3456-7890"), "081234567890");
        assert_eq!(phone_digits("+62 (812) 111"), "62812111");
        assert_eq!(phone_digits(""), "");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b\n"), "a%20b%0A");
        assert_eq!(encode_uri_component("#1 & *x*"), "%231%20%26%20*x*");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_build_deep_link() {
        let link = build_deep_link("https://wa.me/", "0812-3456-7890", "Halo Budi!");
        assert_eq!(link, "https://wa.me/081234567890?text=Halo%20Budi!");
    }
}
