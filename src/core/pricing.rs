//! Pricing engine - every monetary figure on the invoice.
//!
//! All functions are pure and recompute from the current `InvoiceData`; no
//! intermediate result is stored anywhere. Inputs are not validated: a
//! negative price or an out-of-range discount flows through the arithmetic
//! as-is. Intermediate math is done in `i128` and saturated back to `i64`
//! so no input can overflow.

use crate::entities::InvoiceData;

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Package price (0 without a package) plus every additional service price.
#[must_use]
pub fn subtotal(data: &InvoiceData) -> i64 {
    let package_price = data.selected_package.as_ref().map_or(0, |p| i128::from(p.price));
    let services: i128 = data
        .additional_services
        .iter()
        .map(|s| i128::from(s.price))
        .sum();
    saturate(package_price + services)
}

/// `floor(subtotal * discount_percent / 100)`.
///
/// Rounds toward negative infinity, so 33% of 100 is 33 and never 34.
#[must_use]
pub fn discount_amount(data: &InvoiceData) -> i64 {
    let product = i128::from(subtotal(data)) * i128::from(data.discount_percent);
    saturate(product.div_euclid(100))
}

/// What the customer owes for the services: subtotal - discount + shipping.
#[must_use]
pub fn grand_total(data: &InvoiceData) -> i64 {
    saturate(
        i128::from(subtotal(data)) - i128::from(discount_amount(data))
            + i128::from(data.shipping_cost),
    )
}

/// Grand total minus the down payment.
///
/// Not clamped: a down payment larger than the grand total yields a
/// negative balance.
#[must_use]
pub fn remaining_balance(data: &InvoiceData) -> i64 {
    saturate(i128::from(grand_total(data)) - i128::from(data.dp_amount))
}

/// Whether a down payment has been recorded.
#[must_use]
pub const fn has_down_payment(data: &InvoiceData) -> bool {
    data.dp_amount > 0
}

/// Snapshot of all pricing outputs for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Package plus additional services
    pub subtotal: i64,
    /// Floored percentage discount
    pub discount: i64,
    /// Subtotal - discount + shipping
    pub grand_total: i64,
    /// Grand total - down payment, may be negative
    pub remaining_balance: i64,
    /// Whether the final line is the remaining balance
    pub has_down_payment: bool,
}

impl Totals {
    /// Computes every figure from `data`.
    #[must_use]
    pub fn compute(data: &InvoiceData) -> Self {
        Self {
            subtotal: subtotal(data),
            discount: discount_amount(data),
            grand_total: grand_total(data),
            remaining_balance: remaining_balance(data),
            has_down_payment: has_down_payment(data),
        }
    }

    /// The figure shown on the final line: the remaining balance when a
    /// down payment exists, the grand total otherwise.
    #[must_use]
    pub const fn amount_due(&self) -> i64 {
        if self.has_down_payment {
            self.remaining_balance
        } else {
            self.grand_total
        }
    }

    /// Label of the final line, matching [`Totals::amount_due`].
    #[must_use]
    pub const fn amount_due_label(&self) -> &'static str {
        if self.has_down_payment {
            "Sisa Pembayaran"
        } else {
            "Total"
        }
    }
}
