//! Invoice entity - The single record behind the invoice form.
//!
//! `InvoiceData` holds everything the user types into the form plus the
//! selected package. It is created once per session with defaults, edited
//! field by field, and read by pricing and rendering. Nothing is persisted.

use super::package::Package;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

/// Whether the customer has settled the invoice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Fully paid ("LUNAS")
    #[serde(alias = "lunas")]
    Paid,
    /// Not yet fully paid ("BELUM LUNAS")
    #[default]
    #[serde(alias = "belum_lunas")]
    Unpaid,
}

impl PaymentStatus {
    /// Badge text shown on the invoice and in the message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "LUNAS",
            Self::Unpaid => "BELUM LUNAS",
        }
    }
}

/// A user-defined line item added on top of the package
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdditionalService {
    /// Free-text description, may be empty while editing
    #[serde(default)]
    pub name: String,
    /// Price in whole rupiah
    #[serde(default)]
    pub price: i64,
}

/// The root record of the invoice form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceData {
    /// User-assigned invoice number, no uniqueness enforced
    pub invoice_number: String,
    /// Invoice date, defaults to today
    pub date: Option<NaiveDate>,
    /// Carried for shape compatibility; never set by the form
    pub due_date: Option<NaiveDate>,
    /// Customer name, required to generate
    pub customer_name: String,
    /// Carried for shape compatibility; never set by the form
    pub customer_email: String,
    /// Customer phone, also the target of the message deep link
    pub customer_phone: String,
    /// Customer address
    pub customer_address: String,
    /// Date of the event
    pub event_date: Option<NaiveDate>,
    /// Event location or type (e.g., "Resepsi nikah")
    pub event_location: String,
    /// Selected catalog package, required to generate
    pub selected_package: Option<Package>,
    /// Add-on line items in insertion order
    pub additional_services: Vec<AdditionalService>,
    /// Discount percentage; the form keeps it within 0-100
    pub discount_percent: i64,
    /// Delivery cost in whole rupiah
    pub shipping_cost: i64,
    /// Down payment already received, in whole rupiah
    pub dp_amount: i64,
    /// Payment status badge
    pub payment_status: PaymentStatus,
    /// Free-text notes printed under the payment terms
    pub notes: String,
}

impl InvoiceData {
    /// Creates an empty form dated `date`.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            invoice_number: String::new(),
            date: Some(date),
            due_date: None,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
            event_date: None,
            event_location: String::new(),
            selected_package: None,
            additional_services: Vec::new(),
            discount_percent: 0,
            shipping_cost: 0,
            dp_amount: 0,
            payment_status: PaymentStatus::Unpaid,
            notes: String::new(),
        }
    }
}

impl Default for InvoiceData {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
