//! Core business logic - framework-agnostic pricing, form rules, the
//! editing/previewing state machine and invoice layout.

/// Package catalog
pub mod catalog;
/// Invoice document layout and plain-text rendering
pub mod document;
/// Currency and date formatting
pub mod format;
/// Form edits and the generate guard
pub mod invoice;
/// Message body and deep link
pub mod message;
/// Pricing engine
pub mod pricing;
/// Editing/previewing state machine
pub mod session;
