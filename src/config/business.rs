//! Business profile printed on every invoice and message.
//!
//! The defaults are the S2M Videobooth 360 details; a `[business]` table in
//! config.toml overrides any of them individually.

use serde::Deserialize;

/// Identity and fixed texts of the business issuing invoices
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    /// Business name in headers
    pub name: String,
    /// Short line under the name
    pub tagline: String,
    /// Contact phone
    pub phone: String,
    /// Instagram handle including the `@`
    pub instagram: String,
    /// Contact email
    pub email: String,
    /// Payment terms printed above the user's notes
    pub payment_terms: String,
    /// Thank-you line in the footer
    pub thank_you: String,
    /// Small print under the thank-you line
    pub legal_note: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "S2M Videobooth 360".to_string(),
            tagline: "Sewa Videobooth 360".to_string(),
            phone: "0812-1111-4522".to_string(),
            instagram: "@s2m_videobooth360".to_string(),
            email: "official.s2mproduction@gmail.com".to_string(),
            payment_terms: "Pelunasan dilakukan paling lambat H-1 sebelum acara".to_string(),
            thank_you: "Terima kasih telah mempercayakan acara Anda kepada S2M Videobooth 360"
                .to_string(),
            legal_note: "Invoice ini dibuat secara otomatis dan sah tanpa tanda tangan".to_string(),
        }
    }
}
