//! Application configuration loaded from config.toml.
//!
//! The file is optional: when the default path does not exist every section
//! falls back to the built-in S2M Videobooth settings. A path named through
//! `INVOICE_CONFIG` must exist.

/// Business identity printed on invoices
pub mod business;

/// PDF output and external delivery commands
pub mod export;

pub use business::BusinessProfile;
pub use export::ExportConfig;

use crate::{
    core::catalog::Catalog,
    entities::Package,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Raw structure of config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    business: BusinessProfile,
    packages: Vec<Package>,
    export: ExportConfig,
}

/// Fully resolved configuration shared by the whole application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Business identity and fixed texts
    pub business: BusinessProfile,
    /// Bookable packages
    pub catalog: Catalog,
    /// Export destinations and commands
    pub export: ExportConfig,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns `Error::Config` on invalid TOML or an invalid package list.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })?;

        let catalog = if file.packages.is_empty() {
            Catalog::default()
        } else {
            Catalog::from_packages(file.packages)?
        };

        Ok(Self {
            business: file.business,
            catalog,
            export: file.export,
        })
    }
}

/// Gets the configuration path from `INVOICE_CONFIG`, if set.
#[must_use]
pub fn get_config_path() -> Option<PathBuf> {
    std::env::var("INVOICE_CONFIG").ok().map(PathBuf::from)
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    AppConfig::from_toml(&contents)
}

/// Resolves the configuration for this run.
///
/// `explicit` (from the command line) wins over `INVOICE_CONFIG`; either must
/// point at an existing file. Without both, ./config.toml is used when
/// present and built-in defaults otherwise.
///
/// # Errors
/// Returns `Error::Config` if a named file is missing or any file is invalid.
pub fn load_app_configuration(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit.map(Path::to_path_buf).or_else(get_config_path) {
        let config = load_config(&path)?;
        info!("Loaded configuration from {}", path.display());
        return Ok(config);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        let config = load_config(default_path)?;
        info!("Loaded configuration from {DEFAULT_CONFIG_PATH}");
        Ok(config)
    } else {
        info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
        Ok(AppConfig::default())
    }
}
