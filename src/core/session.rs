//! Editing/previewing state machine around the single invoice record.
//!
//! The session owns the `InvoiceData` for the whole run. "Generate" moves to
//! the preview only when the required fields are filled in; "back" always
//! returns to the form. Nothing is copied between modes: the preview reads
//! the same record the form edited.

use crate::{
    core::invoice::validate_for_generation,
    entities::InvoiceData,
    errors::{Error, Result},
};
use tracing::{info, warn};

/// Which screen the application is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The form is shown and editable
    #[default]
    Editing,
    /// The rendered invoice is shown with its export actions
    Previewing,
}

/// The invoice record together with the current mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSession {
    data: InvoiceData,
    mode: Mode,
}

impl InvoiceSession {
    /// Starts a session on a fresh form dated today.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session in editing mode on existing data.
    #[must_use]
    pub const fn with_data(data: InvoiceData) -> Self {
        Self {
            data,
            mode: Mode::Editing,
        }
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Read access to the record in any mode.
    #[must_use]
    pub const fn data(&self) -> &InvoiceData {
        &self.data
    }

    /// Write access for form edits.
    ///
    /// # Errors
    /// Returns `Error::NotEditing` while previewing.
    pub fn form(&mut self) -> Result<&mut InvoiceData> {
        match self.mode {
            Mode::Editing => Ok(&mut self.data),
            Mode::Previewing => Err(Error::NotEditing),
        }
    }

    /// The record as seen by the export actions.
    ///
    /// # Errors
    /// Returns `Error::NotPreviewing` while editing.
    pub fn preview(&self) -> Result<&InvoiceData> {
        match self.mode {
            Mode::Previewing => Ok(&self.data),
            Mode::Editing => Err(Error::NotPreviewing),
        }
    }

    /// Switches to the preview if customer name and package are present.
    ///
    /// # Errors
    /// Returns `Error::MissingRequiredFields` and stays in editing otherwise.
    pub fn generate(&mut self) -> Result<()> {
        validate_for_generation(&self.data).inspect_err(|e| warn!("Generate refused: {e}"))?;
        self.mode = Mode::Previewing;
        info!(invoice = %self.data.invoice_number, "Invoice generated");
        Ok(())
    }

    /// Returns to the form, keeping every field as it was.
    pub fn back_to_form(&mut self) {
        self.mode = Mode::Editing;
    }
}
