//! Currency and date formatting for Indonesian invoices.
//!
//! Amounts render like `Rp 1.500.000`: rupiah symbol, `.` as thousands
//! separator, no decimals, and a leading `-` for negatives. Dates render in
//! long form (`18 Oktober 2026`), or `-` when absent.

use chrono::{Datelike, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Groups the digits of `value` in threes with `.`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats a whole-rupiah amount, e.g. `Rp 1.670.000` or `-Rp 200.000`.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    let grouped = group_thousands(amount.unsigned_abs());
    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Formats a deduction line amount, e.g. `-Rp 180.000`.
#[must_use]
pub fn format_deduction(amount: i64) -> String {
    format!("-{}", format_currency(amount))
}

/// Formats a date as `18 Oktober 2026`, or `-` when absent.
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || "-".to_string(),
        |d| format!("{} {} {}", d.day(), MONTHS_ID[d.month0() as usize], d.year()),
    )
}

/// Shows `-` in place of blank text.
#[must_use]
pub fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() { "-" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(1_500_000), "1.500.000");
        assert_eq!(group_thousands(12_345_678), "12.345.678");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "Rp 0");
        assert_eq!(format_currency(1_670_000), "Rp 1.670.000");
        assert_eq!(format_currency(-200_000), "-Rp 200.000");
        assert_eq!(format_currency(i64::MIN), "-Rp 9.223.372.036.854.775.808");
    }

    #[test]
    fn test_format_deduction() {
        assert_eq!(format_deduction(180_000), "-Rp 180.000");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2026, 10, 18)),
            "18 Oktober 2026"
        );
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2027, 1, 5)), "5 Januari 2027");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Gedung Sate"), "Gedung Sate");
    }
}
