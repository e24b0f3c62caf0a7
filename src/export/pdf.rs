//! PDF download - lays the invoice document out on A4 pages.
//!
//! DejaVu Sans is embedded so names and notes outside Latin-1 print
//! correctly, and the same font files are parsed with `ttf-parser` to
//! measure text for right alignment and wrapping. Content that runs past
//! the bottom margin continues on a new page. Layout runs on tokio's
//! blocking pool and the file write is async; the caller is suspended
//! until both finish.

use crate::{
    config::AppConfig,
    core::{
        document::{InvoiceDocument, TotalKind},
        session::InvoiceSession,
    },
    errors::{Error, Result},
};
use printpdf::{
    Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point, Rgb,
};
use std::{io::Cursor, path::PathBuf};
use tracing::{debug, info};
use ttf_parser::Face;

static REGULAR_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BOLD_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

const PT_TO_MM: f32 = 25.4 / 72.0;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_X: f32 = 15.0;
const MARGIN_TOP: f32 = 15.0;
const MARGIN_BOTTOM: f32 = 15.0;
const CONTENT_RIGHT: f32 = PAGE_W - MARGIN_X;
const CONTENT_WIDTH: f32 = CONTENT_RIGHT - MARGIN_X;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 11.0;
const TEXT_SIZE: f32 = 9.0;
const SMALL_SIZE: f32 = 7.5;
const LINE_H: f32 = 4.8;

const COL_DURATION_CENTER: f32 = 130.0;
const DESCRIPTION_WIDTH: f32 = 95.0;

/// File name of the downloaded PDF: `Invoice-{invoice number}.pdf`.
///
/// Path separators in the number become `_` so the file stays inside the
/// output directory.
#[must_use]
pub fn pdf_file_name(invoice_number: &str) -> String {
    let safe: String = invoice_number
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("Invoice-{safe}.pdf")
}

/// Width in mm of `text` set in `face` at `size` pt, from the glyph advances.
/// Characters the font has no glyph for take no space.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_width_mm(face: &Face<'_>, text: &str, size: f32) -> f32 {
    let units_per_em = f32::from(face.units_per_em());
    if units_per_em <= 0.0 {
        return 0.0;
    }
    let advance: u32 = text
        .chars()
        .filter_map(|c| face.glyph_index(c))
        .map(|gid| u32::from(face.glyph_hor_advance(gid).unwrap_or(0)))
        .sum();
    advance as f32 / units_per_em * size * PT_TO_MM
}

/// Left edge that makes `text` end exactly at `x_right`.
#[must_use]
pub fn right_aligned_x(face: &Face<'_>, text: &str, size: f32, x_right: f32) -> f32 {
    x_right - text_width_mm(face, text, size)
}

/// Greedy word wrap to `max_width` mm. Words wider than a line are split
/// between characters.
#[must_use]
pub fn wrap_to_width(face: &Face<'_>, input: &str, size: f32, max_width: f32) -> Vec<String> {
    let fits = |text: &str| text_width_mm(face, text, size) <= max_width;
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in input.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{current} {word}");
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            out.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current.push_str(word);
            continue;
        }

        for ch in word.chars() {
            current.push(ch);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                out.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// An embedded font: the PDF handle plus the metrics used for layout.
struct Font {
    pdf: IndirectFontRef,
    face: Face<'static>,
}

impl Font {
    fn embed(doc: &PdfDocumentReference, bytes: &'static [u8]) -> Result<Self> {
        let pdf = doc
            .add_external_font(Cursor::new(bytes))
            .map_err(|e| Error::Export {
                message: format!("Failed to embed font: {e}"),
            })?;
        let face = Face::parse(bytes, 0).map_err(|e| Error::Export {
            message: format!("Failed to parse embedded font: {e}"),
        })?;
        Ok(Self { pdf, face })
    }
}

/// Cursor that writes lines top to bottom and starts new pages as needed.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: Font,
    bold: Font,
    y: f32,
    pages: usize,
}

impl PageWriter<'_> {
    const fn font(&self, bold: bool) -> &Font {
        if bold { &self.bold } else { &self.regular }
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= MARGIN_BOTTOM {
            return;
        }
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_H - MARGIN_TOP;
        self.pages += 1;
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        self.layer
            .use_text(text, size, Mm(x), Mm(self.y), &self.font(bold).pdf);
    }

    fn text_right(&self, text: &str, size: f32, x_right: f32, bold: bool) {
        let x = right_aligned_x(&self.font(bold).face, text, size, x_right).max(MARGIN_X);
        self.text(text, size, x, bold);
    }

    fn text_center(&self, text: &str, size: f32, x_center: f32) {
        let width = text_width_mm(&self.regular.face, text, size);
        let x = (x_center - width / 2.0).max(MARGIN_X);
        self.text(text, size, x, false);
    }

    fn wrap(&self, text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
        wrap_to_width(&self.font(bold).face, text, size, max_width)
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        for wrapped in self.wrap(text, size, bold, CONTENT_WIDTH) {
            self.ensure_space(LINE_H);
            self.text(&wrapped, size, MARGIN_X, bold);
            self.y -= LINE_H;
        }
    }

    fn rule(&mut self, thickness: f32) {
        self.ensure_space(2.0);
        let y = self.y + LINE_H / 2.0;
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_X), Mm(y)), false),
                (Point::new(Mm(CONTENT_RIGHT), Mm(y)), false),
            ],
            is_closed: false,
        });
        self.y -= 2.0;
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }
}

/// Renders `doc` into PDF bytes.
///
/// # Errors
/// Returns `Error::Export` if a font cannot be embedded or the document
/// cannot be serialised.
pub fn render_pdf(doc: &InvoiceDocument) -> Result<Vec<u8>> {
    let export_err = |e: &dyn std::fmt::Display| Error::Export {
        message: e.to_string(),
    };

    let title = format!("Invoice {}", doc.invoice_number);
    let (pdf, page1, layer1) = PdfDocument::new(&title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let regular = Font::embed(&pdf, REGULAR_TTF)?;
    let bold = Font::embed(&pdf, BOLD_TTF)?;

    let mut w = PageWriter {
        doc: &pdf,
        layer: pdf.get_page(page1).get_layer(layer1),
        regular,
        bold,
        y: PAGE_H - MARGIN_TOP,
        pages: 1,
    };

    // Header: business on the left, title, number and status on the right
    w.text(&doc.business_name, HEADING_SIZE + 3.0, MARGIN_X, true);
    w.text_right("INVOICE", TITLE_SIZE, CONTENT_RIGHT, true);
    w.gap(6.5);
    w.text(&doc.tagline, TEXT_SIZE, MARGIN_X, false);
    w.text_right(&doc.invoice_number, TEXT_SIZE, CONTENT_RIGHT, false);
    w.gap(LINE_H + 1.0);
    let status_color = if doc.status == "LUNAS" {
        Color::Rgb(Rgb::new(0.09, 0.5, 0.24, None))
    } else {
        Color::Rgb(Rgb::new(0.75, 0.1, 0.1, None))
    };
    w.layer.set_fill_color(status_color);
    w.text_right(&doc.status, TEXT_SIZE + 1.0, CONTENT_RIGHT, true);
    w.layer.set_fill_color(black());
    w.gap(LINE_H);
    w.rule(0.8);
    w.gap(2.0);

    // Company information and invoice details
    w.line("Informasi Perusahaan", HEADING_SIZE, true);
    for line in &doc.company_lines {
        w.line(line, TEXT_SIZE, false);
    }
    w.gap(2.0);
    w.line("Detail Invoice", HEADING_SIZE, true);
    for (label, value) in &doc.details {
        w.ensure_space(LINE_H);
        w.text(&format!("{label}:"), TEXT_SIZE, MARGIN_X, false);
        w.text(value, TEXT_SIZE, MARGIN_X + 35.0, true);
        w.gap(LINE_H);
    }
    w.gap(3.0);

    // Customer
    w.line("Kepada", HEADING_SIZE, true);
    w.line(&doc.customer_name, TEXT_SIZE + 1.0, true);
    for line in &doc.customer_lines {
        w.line(line, TEXT_SIZE, false);
    }
    w.gap(3.0);

    // Services table
    w.line("Detail Layanan", HEADING_SIZE, true);
    w.rule(0.4);
    w.ensure_space(LINE_H);
    w.text("Deskripsi", TEXT_SIZE, MARGIN_X, true);
    w.text_center("Durasi", TEXT_SIZE, COL_DURATION_CENTER);
    w.text_right("Harga", TEXT_SIZE, CONTENT_RIGHT, true);
    w.gap(LINE_H);
    w.rule(0.4);
    for row in &doc.rows {
        let lines = w.wrap(&row.description, TEXT_SIZE, true, DESCRIPTION_WIDTH);
        #[allow(clippy::cast_precision_loss)]
        let row_lines = lines.len().max(1) as f32 + 1.0;
        w.ensure_space(LINE_H * row_lines);
        w.text(lines.first().map_or("", String::as_str), TEXT_SIZE, MARGIN_X, true);
        w.text_center(&row.duration, TEXT_SIZE, COL_DURATION_CENTER);
        w.text_right(&row.price, TEXT_SIZE, CONTENT_RIGHT, false);
        w.gap(LINE_H);
        for extra in lines.iter().skip(1) {
            w.line(extra, TEXT_SIZE, true);
        }
        if let Some(detail) = &row.detail {
            w.line(detail, SMALL_SIZE, false);
        }
    }
    w.rule(0.4);
    w.gap(1.0);

    // Totals, right aligned
    let label_right = CONTENT_RIGHT - 45.0;
    for total in &doc.totals {
        let (size, bold) = match total.kind {
            TotalKind::Final => {
                w.gap(1.0);
                (HEADING_SIZE, true)
            }
            TotalKind::Normal | TotalKind::Deduction => (TEXT_SIZE, false),
        };
        w.ensure_space(LINE_H);
        w.text_right(&format!("{}:", total.label), size, label_right, bold);
        w.text_right(&total.amount, size, CONTENT_RIGHT, true);
        w.gap(LINE_H);
    }
    w.gap(4.0);

    // Notes
    w.line("Catatan", HEADING_SIZE, true);
    for note in &doc.notes {
        w.line(note, TEXT_SIZE, false);
    }
    w.gap(3.0);

    // Footer
    w.rule(0.4);
    for (i, line) in doc.footer.iter().enumerate() {
        let size = if i == 0 { TEXT_SIZE } else { SMALL_SIZE };
        for wrapped in w.wrap(line, size, false, CONTENT_WIDTH) {
            w.ensure_space(LINE_H);
            w.text_center(&wrapped, size, PAGE_W / 2.0);
            w.gap(LINE_H);
        }
    }

    let pages = w.pages;
    drop(w);
    debug!(pages, "Invoice PDF laid out");

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    pdf.save(&mut writer).map_err(|e| export_err(&e))?;
    writer.into_inner().map_err(|e| export_err(&e))
}

/// Renders the previewed invoice and writes it to the output directory.
///
/// Returns the path of the written file.
///
/// # Errors
/// Returns `Error::NotPreviewing` outside the preview, or `Error::Export` if
/// layout or writing fails. The session is left untouched either way.
pub async fn download_pdf(session: &InvoiceSession, config: &AppConfig) -> Result<PathBuf> {
    let data = session.preview()?;
    let doc = InvoiceDocument::build(data, &config.business);
    let path = config.export.output_dir.join(pdf_file_name(&data.invoice_number));

    let bytes = tokio::task::spawn_blocking(move || render_pdf(&doc))
        .await
        .map_err(|e| Error::Export {
            message: format!("PDF worker failed: {e}"),
        })??;

    let write = async {
        tokio::fs::create_dir_all(&config.export.output_dir).await?;
        tokio::fs::write(&path, &bytes).await
    };
    write.await.map_err(|e| Error::Export {
        message: format!("Failed to write {}: {e}", path.display()),
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Invoice PDF written");
    Ok(path)
}
