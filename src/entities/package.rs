//! Package entity - One tier of the videobooth rental catalog.
//!
//! Packages are defined once at startup (built-in defaults or `[[packages]]`
//! in config.toml) and never change while the program runs.

use serde::Deserialize;

/// A service tier the customer can book
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Package {
    /// Unique key used to select the package (e.g., "gold")
    pub id: String,
    /// Display name printed on the invoice (e.g., "GOLD")
    pub name: String,
    /// Rental duration label (e.g., "5 Jam")
    pub duration: String,
    /// Price in whole rupiah
    pub price: i64,
    /// Suggested event types for this tier
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Package {
    /// Creates a package from borrowed parts.
    #[must_use]
    pub fn new(id: &str, name: &str, duration: &str, price: i64, recommendations: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            duration: duration.to_string(),
            price,
            recommendations: recommendations.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}
