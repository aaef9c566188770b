//! The beekeeper registry: vendor records and the YAML loader.
//!
//! The directory is small and changes rarely, so it lives in a YAML file
//! loaded once at startup and validated as a whole. A bad registry is a
//! startup failure, never a per-request one.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::GeoPoint;
use crate::search::Locate;

/// A beekeeper listed in the directory.
///
/// The engine only reads the coordinates; everything else is the vendor's
/// public listing data, passed through to API consumers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Honey price in euros per kilogram, if the vendor publishes one.
    pub price_eur_per_kg: Option<Decimal>,
    /// Jar sizes offered, in grams.
    #[serde(default)]
    pub jar_sizes_g: Vec<u32>,
}

impl Vendor {
    /// Generate a URL-safe slug from the vendor name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl Locate for Vendor {
    fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VendorsFile {
    pub vendors: Vec<Vendor>,
}

/// Load and validate the vendor registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_vendors(path: &Path) -> Result<VendorsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VendorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let vendors_file: VendorsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::VendorsFileParse)?;

    validate_vendors(&vendors_file)?;

    Ok(vendors_file)
}

fn validate_vendors(vendors_file: &VendorsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for vendor in &vendors_file.vendors {
        if vendor.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "vendor name must be non-empty".to_string(),
            ));
        }

        if vendor.position().validate().is_err() {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has invalid coordinates ({}, {})",
                vendor.name, vendor.latitude, vendor.longitude
            )));
        }

        if vendor.jar_sizes_g.iter().any(|&size| size == 0) {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' lists a zero-gram jar size",
                vendor.name
            )));
        }

        let lower_name = vendor.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor name: '{}'",
                vendor.name
            )));
        }

        let slug = vendor.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor slug: '{}' (from vendor '{}')",
                slug, vendor.name
            )));
        }
    }

    Ok(())
}
