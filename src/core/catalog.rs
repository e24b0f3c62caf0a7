//! Package catalog - the fixed set of tiers a customer can book.
//!
//! The catalog is built once at startup and only read afterwards. Lookups are
//! by package id; selecting a package always clones the catalog entry so the
//! invoice can only ever hold a real tier.

use crate::{
    entities::Package,
    errors::{Error, Result},
};
use std::collections::HashSet;

/// Immutable list of bookable packages, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// Builds a catalog after checking every entry.
    ///
    /// # Errors
    /// Returns `Error::Config` if the list is empty, an id repeats, or an
    /// entry has a blank id/name or a non-positive price.
    pub fn from_packages(packages: Vec<Package>) -> Result<Self> {
        if packages.is_empty() {
            return Err(Error::Config {
                message: "Package catalog cannot be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for package in &packages {
            if package.id.trim().is_empty() || package.name.trim().is_empty() {
                return Err(Error::Config {
                    message: "Package id and name cannot be empty".to_string(),
                });
            }
            if package.price <= 0 {
                return Err(Error::Config {
                    message: format!("Package '{}' must have a positive price", package.id),
                });
            }
            if !seen.insert(package.id.as_str()) {
                return Err(Error::Config {
                    message: format!("Duplicate package id '{}'", package.id),
                });
            }
        }

        Ok(Self { packages })
    }

    /// All packages in display order.
    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Finds a package by id, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Package> {
        let id = id.trim();
        self.packages.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Whether `package` is exactly one of the catalog entries.
    #[must_use]
    pub fn contains(&self, package: &Package) -> bool {
        self.packages.iter().any(|p| p == package)
    }
}

impl Default for Catalog {
    /// The S2M Videobooth 360 price list.
    fn default() -> Self {
        Self {
            packages: vec![
                Package::new(
                    "silver",
                    "SILVER",
                    "3 Jam",
                    1_200_000,
                    &["Ulang tahun", "farewell", "gathering"],
                ),
                Package::new(
                    "gold",
                    "GOLD",
                    "5 Jam",
                    1_500_000,
                    &["Resepsi nikah", "seminar", "festival"],
                ),
                Package::new(
                    "diamond",
                    "DIAMOND",
                    "7 Jam",
                    2_000_000,
                    &["Wedding full day", "konser", "expo"],
                ),
            ],
        }
    }
}
