//! Entity module - Plain data shapes shared by every layer.
//! Business rules live in `core`; these types only describe the data.

pub mod invoice;
pub mod package;

pub use invoice::{AdditionalService, InvoiceData, PaymentStatus};
pub use package::Package;
