//! Invoice form business logic - every edit the form can make.
//!
//! These functions are the only way the form mutates `InvoiceData`. They
//! apply the same constraints the form inputs did (discount within 0-100,
//! no negative amounts, packages only from the catalog). A rejected edit
//! leaves the record unchanged. The pricing engine itself trusts whatever it
//! is given.

use crate::{
    core::catalog::Catalog,
    entities::{AdditionalService, InvoiceData, Package, PaymentStatus},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::debug;

/// A single-valued field of the invoice form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Invoice number
    InvoiceNumber,
    /// Invoice date
    Date,
    /// Customer name
    CustomerName,
    /// Customer phone
    CustomerPhone,
    /// Customer address
    CustomerAddress,
    /// Event date
    EventDate,
    /// Event location or type
    EventLocation,
    /// Discount percent
    DiscountPercent,
    /// Shipping cost
    ShippingCost,
    /// Down payment
    DpAmount,
    /// Free-text notes
    Notes,
}

impl FormField {
    /// Every field with its command-line name.
    pub const ALL: [(&'static str, Self); 11] = [
        ("number", Self::InvoiceNumber),
        ("date", Self::Date),
        ("customer", Self::CustomerName),
        ("phone", Self::CustomerPhone),
        ("address", Self::CustomerAddress),
        ("event-date", Self::EventDate),
        ("event-type", Self::EventLocation),
        ("discount", Self::DiscountPercent),
        ("shipping", Self::ShippingCost),
        ("dp", Self::DpAmount),
        ("notes", Self::Notes),
    ];
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, field)| *field)
            .ok_or_else(|| Error::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Reads a whole-rupiah amount.
///
/// Empty input counts as 0. `.`, `,` and `_` are accepted as thousands
/// separators, so `1.500.000` reads as 1500000.
///
/// # Errors
/// Returns `Error::InvalidNumber` for anything that is not a whole number.
pub fn parse_amount(input: &str) -> Result<i64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '_'))
        .collect();
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned.parse().map_err(|_| Error::InvalidNumber {
        input: input.to_string(),
    })
}

/// Reads a `YYYY-MM-DD` date; empty input clears the date.
///
/// # Errors
/// Returns `Error::InvalidDate` for malformed input.
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Error::InvalidDate {
            input: input.to_string(),
        })
}

fn non_negative(field: &'static str, amount: i64) -> Result<i64> {
    if amount < 0 {
        return Err(Error::InvalidAmount { field, amount });
    }
    Ok(amount)
}

/// Applies one field edit from raw text input.
///
/// # Errors
/// Returns a parse or range error; the record is unchanged on error.
pub fn set_field(data: &mut InvoiceData, field: FormField, value: &str) -> Result<()> {
    debug!(?field, value, "Form field changed");
    match field {
        FormField::InvoiceNumber => data.invoice_number = value.trim().to_string(),
        FormField::Date => data.date = parse_date(value)?,
        FormField::CustomerName => data.customer_name = value.trim().to_string(),
        FormField::CustomerPhone => data.customer_phone = value.trim().to_string(),
        FormField::CustomerAddress => data.customer_address = value.trim().to_string(),
        FormField::EventDate => data.event_date = parse_date(value)?,
        FormField::EventLocation => data.event_location = value.trim().to_string(),
        FormField::DiscountPercent => set_discount_percent(data, parse_amount(value)?)?,
        FormField::ShippingCost => set_shipping_cost(data, parse_amount(value)?)?,
        FormField::DpAmount => set_dp_amount(data, parse_amount(value)?)?,
        FormField::Notes => data.notes = value.to_string(),
    }
    Ok(())
}

/// Sets the discount percentage, which must be within 0-100.
///
/// # Errors
/// Returns `Error::InvalidDiscount` for values outside 0-100.
pub fn set_discount_percent(data: &mut InvoiceData, percent: i64) -> Result<()> {
    if !(0..=100).contains(&percent) {
        return Err(Error::InvalidDiscount { percent });
    }
    data.discount_percent = percent;
    Ok(())
}

/// Sets the shipping cost.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a negative amount.
pub fn set_shipping_cost(data: &mut InvoiceData, amount: i64) -> Result<()> {
    data.shipping_cost = non_negative("ongkos kirim", amount)?;
    Ok(())
}

/// Sets the down payment.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a negative amount.
pub fn set_dp_amount(data: &mut InvoiceData, amount: i64) -> Result<()> {
    data.dp_amount = non_negative("DP", amount)?;
    Ok(())
}

/// Sets the payment status.
pub const fn set_payment_status(data: &mut InvoiceData, status: PaymentStatus) {
    data.payment_status = status;
}

/// Selects the catalog package with `id`.
///
/// # Errors
/// Returns `Error::PackageNotFound` if the catalog has no such package.
pub fn select_package<'a>(
    data: &mut InvoiceData,
    catalog: &'a Catalog,
    id: &str,
) -> Result<&'a Package> {
    let package = catalog.find(id).ok_or_else(|| Error::PackageNotFound {
        id: id.to_string(),
    })?;
    data.selected_package = Some(package.clone());
    debug!(package = %package.id, "Package selected");
    Ok(package)
}

/// Clears the package selection.
pub fn clear_package(data: &mut InvoiceData) {
    data.selected_package = None;
}

/// Appends an empty service and returns its index.
pub fn add_service(data: &mut InvoiceData) -> usize {
    data.additional_services.push(AdditionalService::default());
    data.additional_services.len() - 1
}

fn service_mut(data: &mut InvoiceData, index: usize) -> Result<&mut AdditionalService> {
    data.additional_services
        .get_mut(index)
        .ok_or(Error::ServiceNotFound { index })
}

/// Renames the service at `index`.
///
/// # Errors
/// Returns `Error::ServiceNotFound` for an index past the end.
pub fn set_service_name(data: &mut InvoiceData, index: usize, name: &str) -> Result<()> {
    service_mut(data, index)?.name = name.trim().to_string();
    Ok(())
}

/// Reprices the service at `index`.
///
/// # Errors
/// Returns `Error::ServiceNotFound` for a bad index or `Error::InvalidAmount`
/// for a negative price.
pub fn set_service_price(data: &mut InvoiceData, index: usize, price: i64) -> Result<()> {
    let price = non_negative("harga layanan", price)?;
    service_mut(data, index)?.price = price;
    Ok(())
}

/// Removes the service at `index`, keeping the order of the rest.
///
/// # Errors
/// Returns `Error::ServiceNotFound` for an index past the end.
pub fn remove_service(data: &mut InvoiceData, index: usize) -> Result<AdditionalService> {
    if index >= data.additional_services.len() {
        return Err(Error::ServiceNotFound { index });
    }
    Ok(data.additional_services.remove(index))
}

/// The generate guard: a customer name and a package are required.
///
/// # Errors
/// Returns `Error::MissingRequiredFields` when either is missing.
pub fn validate_for_generation(data: &InvoiceData) -> Result<()> {
    if data.customer_name.is_empty() || data.selected_package.is_none() {
        return Err(Error::MissingRequiredFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_service_appends_empty_entry() {
        let mut data = gold_invoice();
        let before = data.additional_services.clone();

        let index = add_service(&mut data);

        assert_eq!(index, 1);
        assert_eq!(data.additional_services.len(), 2);
        assert_eq!(data.additional_services[..1], before[..]);
        assert_eq!(data.additional_services[1], AdditionalService::default());
        assert_eq!(data.additional_services[1].name, "");
        assert_eq!(data.additional_services[1].price, 0);
    }

    #[test]
    fn test_remove_service_keeps_order() {
        let mut data = empty_invoice();
        data.additional_services = vec![service("A", 1), service("B", 2), service("C", 3)];

        let removed = remove_service(&mut data, 1).unwrap();

        assert_eq!(removed, service("B", 2));
        assert_eq!(data.additional_services, vec![service("A", 1), service("C", 3)]);
    }

    #[test]
    fn test_remove_service_out_of_range() {
        let mut data = empty_invoice();
        let result = remove_service(&mut data, 0);
        assert!(matches!(result, Err(Error::ServiceNotFound { index: 0 })));
    }

    #[test]
    fn test_update_service_in_place() {
        let mut data = empty_invoice();
        add_service(&mut data);
        add_service(&mut data);

        set_service_name(&mut data, 1, "  Props  ").unwrap();
        set_service_price(&mut data, 1, 150_000).unwrap();

        assert_eq!(data.additional_services[0], AdditionalService::default());
        assert_eq!(data.additional_services[1], service("Props", 150_000));
    }

    #[test]
    fn test_negative_service_price_rejected() {
        let mut data = empty_invoice();
        add_service(&mut data);
        let result = set_service_price(&mut data, 0, -1);
        assert!(matches!(result, Err(Error::InvalidAmount { amount: -1, .. })));
        assert_eq!(data.additional_services[0].price, 0);
    }

    #[test]
    fn test_select_package_from_catalog() {
        let catalog = Catalog::default();
        let mut data = empty_invoice();

        let package = select_package(&mut data, &catalog, "diamond").unwrap();
        assert_eq!(package.price, 2_000_000);
        assert!(catalog.contains(data.selected_package.as_ref().unwrap()));

        let missing = select_package(&mut data, &catalog, "bronze");
        assert!(matches!(missing, Err(Error::PackageNotFound { .. })));
        assert_eq!(data.selected_package.as_ref().unwrap().id, "diamond");

        clear_package(&mut data);
        assert!(data.selected_package.is_none());
    }

    #[test]
    fn test_discount_range_enforced_by_form() {
        let mut data = empty_invoice();
        assert!(set_field(&mut data, FormField::DiscountPercent, "100").is_ok());
        assert_eq!(data.discount_percent, 100);

        let result = set_field(&mut data, FormField::DiscountPercent, "101");
        assert!(matches!(result, Err(Error::InvalidDiscount { percent: 101 })));
        assert_eq!(data.discount_percent, 100);

        let result = set_discount_percent(&mut data, -5);
        assert!(matches!(result, Err(Error::InvalidDiscount { percent: -5 })));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut data = empty_invoice();
        assert!(set_field(&mut data, FormField::ShippingCost, "-1").is_err());
        assert!(set_field(&mut data, FormField::DpAmount, "-500").is_err());
        assert_eq!(data.shipping_cost, 0);
        assert_eq!(data.dp_amount, 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("").unwrap(), 0);
        assert_eq!(parse_amount("  ").unwrap(), 0);
        assert_eq!(parse_amount("50000").unwrap(), 50_000);
        assert_eq!(parse_amount("1.500.000").unwrap(), 1_500_000);
        assert_eq!(parse_amount("-200").unwrap(), -200);
        assert!(matches!(parse_amount("abc"), Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-11-07").unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 7)
        );
        assert_eq!(parse_date("").unwrap(), None);
        assert!(matches!(parse_date("07/11/2026"), Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_set_text_fields() {
        let mut data = empty_invoice();
        set_field(&mut data, FormField::InvoiceNumber, " INV-7 ").unwrap();
        set_field(&mut data, FormField::CustomerName, "Sari").unwrap();
        set_field(&mut data, FormField::EventDate, "2026-12-01").unwrap();
        set_field(&mut data, FormField::Date, "").unwrap();
        set_field(&mut data, FormField::Notes, "Bawa backdrop").unwrap();

        assert_eq!(data.invoice_number, "INV-7");
        assert_eq!(data.customer_name, "Sari");
        assert_eq!(data.event_date, NaiveDate::from_ymd_opt(2026, 12, 1));
        assert_eq!(data.date, None);
        assert_eq!(data.notes, "Bawa backdrop");
    }

    #[test]
    fn test_form_field_names() {
        assert_eq!("event-type".parse::<FormField>().unwrap(), FormField::EventLocation);
        assert_eq!("EVENT_DATE".parse::<FormField>().unwrap(), FormField::EventDate);
        assert!(matches!(
            "email".parse::<FormField>(),
            Err(Error::UnknownField { .. })
        ));
    }

    #[test]
    fn test_validate_for_generation() {
        let mut data = gold_invoice();
        assert!(validate_for_generation(&data).is_ok());

        data.customer_name = String::new();
        assert!(matches!(
            validate_for_generation(&data),
            Err(Error::MissingRequiredFields)
        ));

        // Only an empty name is missing; the form trims typed input first
        data.customer_name = " ".to_string();
        assert!(validate_for_generation(&data).is_ok());
        set_field(&mut data, FormField::CustomerName, "   ").unwrap();
        assert!(matches!(
            validate_for_generation(&data),
            Err(Error::MissingRequiredFields)
        ));

        data.customer_name = "Budi".to_string();
        data.selected_package = None;
        assert!(matches!(
            validate_for_generation(&data),
            Err(Error::MissingRequiredFields)
        ));
    }
}
