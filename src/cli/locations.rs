//! Locations command implementation

use super::AddonSource;
use crate::addon::AddonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationsError {
    #[error("Addon error: {0}")]
    AddonError(#[from] AddonError),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// List supported products and their locations
pub fn list_locations(addon: &AddonSource, product: Option<&str>) -> Result<(), LocationsError> {
    let tables = addon.load()?;

    if let Some(name) = product {
        if !tables.locations.contains(name) {
            return Err(LocationsError::UnknownProduct(name.to_string()));
        }
    }

    let rules: Vec<_> = tables
        .locations
        .iter()
        .filter(|(name, _)| product.is_none_or(|p| p == *name))
        .collect();

    if rules.is_empty() {
        println!("No products in this addon.");
        return Ok(());
    }

    for (name, rule) in rules {
        let omni = if tables.is_omni_product(name) { " (omni)" } else { "" };
        println!("  {}{}", name, omni);
        for location in &rule.location {
            let icon = if rule.needs_icon(location) { "" } else { "  [no icon]" };
            println!("    {}{}", location, icon);
        }
        println!();
    }

    Ok(())
}
