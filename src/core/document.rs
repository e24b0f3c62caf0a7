//! Invoice document layout shared by preview, print and PDF export.
//!
//! `InvoiceDocument::build` decides what appears on the invoice and in which
//! order, with every amount and date already formatted. Renderers only place
//! the pieces: [`InvoiceDocument::to_text`] for the terminal and printer,
//! `export::pdf` for the PDF.

use crate::{
    config::BusinessProfile,
    core::{
        format::{format_currency, format_date, format_deduction},
        pricing::Totals,
    },
    entities::InvoiceData,
};

/// Default width of the plain-text layout in columns
pub const TEXT_WIDTH: usize = 64;

const DURATION_COL: usize = 12;
const PRICE_COL: usize = 18;

/// One row of the service table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    /// Main description
    pub description: String,
    /// Smaller second line under the description
    pub detail: Option<String>,
    /// Duration column, `-` for add-ons
    pub duration: String,
    /// Formatted price
    pub price: String,
}

/// How a totals line is emphasised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalKind {
    /// Regular figure
    Normal,
    /// Subtracted figure (discount, down payment)
    Deduction,
    /// The closing amount-due line
    Final,
}

/// One line of the totals block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalLine {
    /// Label without the trailing colon
    pub label: String,
    /// Formatted amount
    pub amount: String,
    /// Emphasis
    pub kind: TotalKind,
}

/// A fully laid-out invoice, independent of the output medium
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Business name
    pub business_name: String,
    /// Line under the business name
    pub tagline: String,
    /// `#` followed by the invoice number
    pub invoice_number: String,
    /// `LUNAS` or `BELUM LUNAS`
    pub status: String,
    /// Phone, Instagram and email of the business
    pub company_lines: Vec<String>,
    /// Label/value pairs of the invoice details
    pub details: Vec<(String, String)>,
    /// Customer name
    pub customer_name: String,
    /// Non-empty customer lines under the name
    pub customer_lines: Vec<String>,
    /// Service table rows
    pub rows: Vec<ServiceRow>,
    /// Totals block
    pub totals: Vec<TotalLine>,
    /// Payment terms followed by the user's notes
    pub notes: Vec<String>,
    /// Closing lines
    pub footer: Vec<String>,
}

impl InvoiceDocument {
    /// Lays out `data` for `business`.
    #[must_use]
    pub fn build(data: &InvoiceData, business: &BusinessProfile) -> Self {
        let totals = Totals::compute(data);

        let mut details = vec![("Tanggal Invoice".to_string(), format_date(data.date))];
        if data.event_date.is_some() {
            details.push(("Tanggal Event".to_string(), format_date(data.event_date)));
        }

        let mut customer_lines = Vec::new();
        if !data.customer_phone.is_empty() {
            customer_lines.push(data.customer_phone.clone());
        }
        if !data.customer_address.is_empty() {
            customer_lines.push(data.customer_address.clone());
        }
        if !data.event_location.is_empty() {
            customer_lines.push(format!("Jenis Event: {}", data.event_location));
        }

        let mut rows = Vec::with_capacity(data.additional_services.len() + 1);
        if let Some(package) = &data.selected_package {
            rows.push(ServiceRow {
                description: format!("Paket {}", package.name),
                detail: Some(business.tagline.clone()),
                duration: package.duration.clone(),
                price: format_currency(package.price),
            });
        }
        rows.extend(data.additional_services.iter().map(|service| ServiceRow {
            description: service.name.clone(),
            detail: None,
            duration: "-".to_string(),
            price: format_currency(service.price),
        }));

        let mut notes = vec![business.payment_terms.clone()];
        if !data.notes.is_empty() {
            notes.extend(data.notes.lines().map(str::to_string));
        }

        Self {
            business_name: business.name.clone(),
            tagline: business.tagline.clone(),
            invoice_number: format!("#{}", data.invoice_number),
            status: data.payment_status.label().to_string(),
            company_lines: vec![
                business.phone.clone(),
                business.instagram.clone(),
                business.email.clone(),
            ],
            details,
            customer_name: data.customer_name.clone(),
            customer_lines,
            rows,
            totals: total_lines(data, &totals),
            notes,
            footer: vec![business.thank_you.clone(), business.legal_note.clone()],
        }
    }

    /// Renders the document as fixed-width plain text.
    #[must_use]
    pub fn to_text(&self, width: usize) -> String {
        let width = width.max(DURATION_COL + PRICE_COL + 16);
        let rule = "-".repeat(width);
        let mut out = Vec::new();

        out.push(two_columns(&self.business_name, "INVOICE", width));
        out.push(two_columns(&self.tagline, &self.invoice_number, width));
        out.push(format!("{:>width$}", self.status));
        out.push("=".repeat(width));

        out.push("Informasi Perusahaan".to_string());
        out.extend(self.company_lines.iter().map(|l| format!("  {l}")));
        out.push(String::new());
        out.push("Detail Invoice".to_string());
        out.extend(self.details.iter().map(|(label, value)| format!("  {label}: {value}")));
        out.push(String::new());

        out.push("Kepada".to_string());
        out.push(format!("  {}", self.customer_name));
        out.extend(self.customer_lines.iter().map(|l| format!("  {l}")));
        out.push(String::new());

        let desc_col = width - DURATION_COL - PRICE_COL;
        out.push("Detail Layanan".to_string());
        out.push(rule.clone());
        out.push(format!(
            "{:<desc_col$}{:^DURATION_COL$}{:>PRICE_COL$}",
            "Deskripsi", "Durasi", "Harga"
        ));
        out.push(rule.clone());
        for row in &self.rows {
            let mut lines = wrap_text(&row.description, desc_col.saturating_sub(1));
            if lines.is_empty() {
                lines.push(String::new());
            }
            out.push(format!(
                "{:<desc_col$}{:^DURATION_COL$}{:>PRICE_COL$}",
                lines[0], row.duration, row.price
            ));
            out.extend(lines.iter().skip(1).cloned());
            if let Some(detail) = &row.detail {
                out.push(format!("  {detail}"));
            }
        }
        out.push(rule.clone());

        for line in &self.totals {
            let label = format!("{}:", line.label);
            let row = format!("{label:>desc_col$}{:>w$}", line.amount, w = DURATION_COL + PRICE_COL);
            if line.kind == TotalKind::Final {
                out.push(" ".repeat(desc_col) + &"=".repeat(DURATION_COL + PRICE_COL));
            }
            out.push(row);
        }
        out.push(String::new());

        out.push("Catatan".to_string());
        for note in &self.notes {
            out.extend(wrap_text(note, width - 2).into_iter().map(|l| format!("  {l}")));
        }
        out.push(rule);
        for line in &self.footer {
            for wrapped in wrap_text(line, width) {
                out.push(format!("{wrapped:^width$}").trim_end().to_string());
            }
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

fn total_lines(data: &InvoiceData, totals: &Totals) -> Vec<TotalLine> {
    let line = |label: String, amount: String, kind| TotalLine {
        label,
        amount,
        kind,
    };

    let mut lines = vec![line(
        "Subtotal".to_string(),
        format_currency(totals.subtotal),
        TotalKind::Normal,
    )];
    if data.discount_percent > 0 {
        lines.push(line(
            format!("Diskon ({}%)", data.discount_percent),
            format_deduction(totals.discount),
            TotalKind::Deduction,
        ));
    }
    if data.shipping_cost > 0 {
        lines.push(line(
            "Ongkos Kirim".to_string(),
            format_currency(data.shipping_cost),
            TotalKind::Normal,
        ));
    }
    lines.push(line(
        "Total Keseluruhan".to_string(),
        format_currency(totals.grand_total),
        TotalKind::Normal,
    ));
    if totals.has_down_payment {
        lines.push(line(
            "DP (Down Payment)".to_string(),
            format_deduction(data.dp_amount),
            TotalKind::Deduction,
        ));
    }
    lines.push(line(
        totals.amount_due_label().to_string(),
        format_currency(totals.amount_due()),
        TotalKind::Final,
    ));
    lines
}

/// Places `left` and `right` on one line of `width` columns.
#[must_use]
pub fn two_columns(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Greedy word wrap at `max_chars` columns. Words longer than a line are
/// broken into line-sized pieces.
#[must_use]
pub fn wrap_text(input: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in input.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current.chars().count() + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if word_len <= max_chars {
            current.push_str(word);
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        out.extend(chars.chunks(max_chars).map(|chunk| chunk.iter().collect::<String>()));
        // The last piece may still take following words
        current = out.pop().unwrap_or_default();
    }

    if !current.is_empty() {
        out.push(current);
    }

    out
}
