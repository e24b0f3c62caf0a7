//! Shared test utilities for the invoice generator.
//!
//! This module provides fixed-date invoices and sessions so that tests never
//! depend on the current date.

use crate::{
    config::AppConfig,
    core::{catalog::Catalog, session::InvoiceSession},
    entities::{AdditionalService, InvoiceData, Package},
};
use chrono::NaiveDate;

/// The date every test invoice is issued on.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default()
}

/// An untouched form dated [`test_date`].
#[must_use]
pub fn empty_invoice() -> InvoiceData {
    InvoiceData::new(test_date())
}

/// The GOLD entry of the default catalog.
#[must_use]
pub fn gold_package() -> Package {
    Catalog::default()
        .find("gold")
        .cloned()
        .unwrap_or_else(|| Package::new("gold", "GOLD", "5 Jam", 1_500_000, &[]))
}

/// Builds an additional service.
#[must_use]
pub fn service(name: &str, price: i64) -> AdditionalService {
    AdditionalService {
        name: name.to_string(),
        price,
    }
}

/// A complete invoice for the GOLD scenario.
///
/// # Defaults
/// * package: GOLD (1,500,000)
/// * one service: "Dekorasi" (300,000)
/// * discount: 10%, shipping: 50,000, down payment: 500,000
pub fn gold_invoice() -> InvoiceData {
    let mut data = empty_invoice();
    data.invoice_number = "INV-001".to_string();
    data.customer_name = "Budi Santoso".to_string();
    data.customer_phone = "0812-3456-7890".to_string();
    data.customer_address = "Jl. Merdeka No. 1, Bandung".to_string();
    data.event_date = NaiveDate::from_ymd_opt(2026, 11, 7);
    data.event_location = "Resepsi nikah".to_string();
    data.selected_package = Some(gold_package());
    data.additional_services.push(service("Dekorasi", 300_000));
    data.discount_percent = 10;
    data.shipping_cost = 50_000;
    data.dp_amount = 500_000;
    data
}

/// A session in editing mode holding [`gold_invoice`].
#[must_use]
pub fn gold_session() -> InvoiceSession {
    InvoiceSession::with_data(gold_invoice())
}

/// A session already switched to preview with [`gold_invoice`].
#[must_use]
pub fn previewing_session() -> InvoiceSession {
    let mut session = gold_session();
    session
        .generate()
        .unwrap_or_else(|e| panic!("gold invoice should pass the generate guard: {e}"));
    session
}

/// Default configuration writing exports into `dir`.
#[must_use]
pub fn test_config(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.export.output_dir = dir.to_path_buf();
    config
}

/// A fresh, empty directory under the system temp dir.
#[must_use]
pub fn temp_output_dir(label: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let dir = std::env::temp_dir().join(format!("s2m-invoice-{label}-{}-{nanos}", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);
    dir
}
