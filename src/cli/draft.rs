//! Draft files for batch rendering.
//!
//! A draft is the invoice form written down as TOML. It is applied through
//! the same edit functions the interactive form uses, so a draft can never
//! hold a value the form would have refused.

use crate::{
    core::{
        catalog::Catalog,
        invoice::{self, FormField},
    },
    entities::{AdditionalService, InvoiceData, PaymentStatus},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Raw structure of a draft file. Dates are quoted `YYYY-MM-DD` strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftFile {
    /// Invoice number
    pub invoice_number: String,
    /// Invoice date; today when absent
    pub date: Option<String>,
    /// Customer name
    pub customer_name: String,
    /// Customer phone
    pub customer_phone: String,
    /// Customer address
    pub customer_address: String,
    /// Event date
    pub event_date: Option<String>,
    /// Event location or type
    pub event_location: String,
    /// Package id from the catalog
    pub package: Option<String>,
    /// Discount percent, 0-100
    pub discount_percent: i64,
    /// Shipping cost
    pub shipping_cost: i64,
    /// Down payment
    pub dp_amount: i64,
    /// Payment status
    pub payment_status: PaymentStatus,
    /// Notes
    pub notes: String,
    /// Add-on line items
    pub additional_services: Vec<AdditionalService>,
}

fn draft_error(e: &Error) -> Error {
    Error::Draft {
        message: e.to_string(),
    }
}

impl DraftFile {
    /// Parses a draft from TOML text.
    ///
    /// # Errors
    /// Returns `Error::Draft` on invalid TOML or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Draft {
            message: format!("Failed to parse draft: {e}"),
        })
    }

    /// Builds the invoice record, starting from an empty form dated `today`.
    ///
    /// # Errors
    /// Returns `Error::Draft` wrapping the first value the form would reject.
    pub fn into_invoice(self, catalog: &Catalog, today: NaiveDate) -> Result<InvoiceData> {
        let mut data = InvoiceData::new(today);
        self.apply(&mut data, catalog).map_err(|e| draft_error(&e))?;
        Ok(data)
    }

    fn apply(self, data: &mut InvoiceData, catalog: &Catalog) -> Result<()> {
        let text_fields = [
            (FormField::InvoiceNumber, self.invoice_number),
            (FormField::CustomerName, self.customer_name),
            (FormField::CustomerPhone, self.customer_phone),
            (FormField::CustomerAddress, self.customer_address),
            (FormField::EventLocation, self.event_location),
            (FormField::Notes, self.notes),
        ];
        for (field, value) in text_fields {
            invoice::set_field(data, field, &value)?;
        }
        if let Some(date) = self.date {
            invoice::set_field(data, FormField::Date, &date)?;
        }
        if let Some(event_date) = self.event_date {
            invoice::set_field(data, FormField::EventDate, &event_date)?;
        }
        if let Some(id) = self.package {
            invoice::select_package(data, catalog, &id)?;
        }
        invoice::set_discount_percent(data, self.discount_percent)?;
        invoice::set_shipping_cost(data, self.shipping_cost)?;
        invoice::set_dp_amount(data, self.dp_amount)?;
        invoice::set_payment_status(data, self.payment_status);
        for service in self.additional_services {
            let index = invoice::add_service(data);
            invoice::set_service_name(data, index, &service.name)?;
            invoice::set_service_price(data, index, service.price)?;
        }
        Ok(())
    }
}

/// Reads and applies a draft file.
///
/// # Errors
/// Returns `Error::Draft` if the file is unreadable, malformed or rejected
/// by the form rules.
pub async fn load_draft(path: &Path, catalog: &Catalog, today: NaiveDate) -> Result<InvoiceData> {
    debug!("Loading draft from {}", path.display());
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Draft {
            message: format!("Failed to read draft {}: {e}", path.display()),
        })?;
    DraftFile::from_toml(&contents)?.into_invoice(catalog, today)
}
