//! Reference tables shipped with an addon version

use crate::storage::paths;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Failed to read addon table: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse addon table: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Addon table not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Locations a product supports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLocationRule {
    #[serde(default)]
    pub location: BTreeSet<String>,
    /// Locations that render without an icon
    #[serde(default)]
    pub location_without_icons: BTreeSet<String>,
}

impl ProductLocationRule {
    pub fn allows(&self, location: &str) -> bool {
        self.location.contains(location)
    }

    pub fn needs_icon(&self, location: &str) -> bool {
        !self.location_without_icons.contains(location)
    }
}

/// Supported product -> location rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductLocations(BTreeMap<String, ProductLocationRule>);

impl ProductLocations {
    pub fn new(rules: BTreeMap<String, ProductLocationRule>) -> Self {
        Self(rules)
    }

    pub fn get(&self, product: &str) -> Option<&ProductLocationRule> {
        self.0.get(product)
    }

    pub fn contains(&self, product: &str) -> bool {
        self.0.contains_key(product)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductLocationRule)> {
        self.0.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

/// Addon-wide product facts (`product_info.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    #[serde(default)]
    pub omni_products: Vec<String>,
}

/// Everything the validator looks up instead of reading from the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    pub locations: ProductLocations,
    pub omni_products: Vec<String>,
}

impl ReferenceTables {
    pub fn new(locations: ProductLocations, omni_products: Vec<String>) -> Self {
        Self {
            locations,
            omni_products,
        }
    }

    pub fn is_omni_product(&self, product: &str) -> bool {
        self.omni_products.iter().any(|p| p == product)
    }
}

fn read_table<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, AddonError> {
    if !path.exists() {
        return Err(AddonError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load both tables from an addon directory
pub fn load_tables(addon_dir: &Path) -> Result<ReferenceTables, AddonError> {
    let locations: ProductLocations = read_table(&paths::product_locations_path(addon_dir))?;
    let info: ProductInfo = read_table(&paths::product_info_path(addon_dir))?;

    tracing::debug!(
        addon_dir = %addon_dir.display(),
        products = locations.0.len(),
        omni_products = info.omni_products.len(),
        "loaded addon tables"
    );

    Ok(ReferenceTables::new(locations, info.omni_products))
}

/// Load the tables of an installed addon version
pub fn load_addon_version(version: &str) -> Result<ReferenceTables, AddonError> {
    load_tables(&paths::addon_dir(version))
}
