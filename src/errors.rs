//! Unified error type for the invoice generator.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants that end
//! up in front of the user carry their message in Indonesian, matching the
//! rest of the invoice text.

use thiserror::Error;

/// All errors produced by the invoice generator.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Draft file could not be read or contains invalid values
    #[error("Draft error: {message}")]
    Draft {
        /// Description of the problem
        message: String,
    },

    /// The "generate" guard failed: customer name or package is missing
    #[error("Mohon lengkapi nama customer dan pilih paket terlebih dahulu")]
    MissingRequiredFields,

    /// No package with this identifier exists in the catalog
    #[error("Paket '{id}' tidak ditemukan")]
    PackageNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// No additional service exists at this index
    #[error("Layanan tambahan #{index} tidak ditemukan")]
    ServiceNotFound {
        /// The index that was looked up
        index: usize,
    },

    /// A monetary field was given a negative amount
    #[error("Nilai {field} tidak boleh negatif: {amount}")]
    InvalidAmount {
        /// Name of the field being edited
        field: &'static str,
        /// The rejected amount
        amount: i64,
    },

    /// Discount percent outside of 0-100
    #[error("Diskon harus antara 0 dan 100 persen: {percent}")]
    InvalidDiscount {
        /// The rejected percentage
        percent: i64,
    },

    /// Input could not be read as a whole number
    #[error("Bukan angka yang valid: '{input}'")]
    InvalidNumber {
        /// The raw input
        input: String,
    },

    /// Input could not be read as a `YYYY-MM-DD` date
    #[error("Tanggal tidak valid (gunakan YYYY-MM-DD): '{input}'")]
    InvalidDate {
        /// The raw input
        input: String,
    },

    /// The form has no field with this name
    #[error("Field tidak dikenal: '{name}'")]
    UnknownField {
        /// The field name that was given
        name: String,
    },

    /// An export action was requested outside of the preview
    #[error("Buat invoice terlebih dahulu (generate) sebelum print, download, atau kirim")]
    NotPreviewing,

    /// A form edit was requested while previewing
    #[error("Form tidak dapat diubah saat preview, kembali ke form dengan 'back'")]
    NotEditing,

    /// Rendering or delivering an export failed
    #[error("Export error: {message}")]
    Export {
        /// Description of the failure
        message: String,
    },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
