//! Location and asset checks

use super::{ValidationContext, ValidationIssue};
use crate::addon::{ProductLocationRule, ReferenceTables};
use crate::manifest::{AppManifest, ProductConfig};
use crate::settings::ValidatorConfig;
use crate::storage::{AssetError, AssetStore};
use thiserror::Error;

/// Failures that stop the location check altogether
#[derive(Error, Debug)]
pub enum LocationCheckError {
    #[error("No location table for product: {0}")]
    UnknownProduct(String),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Products whose locations need checking
///
/// Omni apps with a backend on a current platform may declare event-only
/// products; those carry no locations and are left out.
fn products_to_check<'a>(
    manifest: &'a AppManifest,
    config: &ValidatorConfig,
) -> Vec<(&'a str, &'a ProductConfig)> {
    let narrow = manifest.has_feature("omni")
        && manifest.has_feature("backend")
        && config.deprecated_platform() != Some(manifest.platform_version.as_str());

    manifest
        .product
        .iter()
        .filter(|(_, product)| !narrow || !product.location.is_empty() || !product.has_events())
        .map(|(name, product)| (name.as_str(), product))
        .collect()
}

fn rule_for<'t>(
    tables: &'t ReferenceTables,
    product: &str,
) -> Result<&'t ProductLocationRule, LocationCheckError> {
    tables
        .locations
        .get(product)
        .ok_or_else(|| LocationCheckError::UnknownProduct(product.to_string()))
}

/// Check declared locations, then every location's template and icon
///
/// Field checks only run once every product has valid locations and the
/// app content directory exists.
pub fn check_locations(
    manifest: &AppManifest,
    context: &ValidationContext,
    tables: &ReferenceTables,
    config: &ValidatorConfig,
    assets: &dyn AssetStore,
) -> Result<Vec<ValidationIssue>, LocationCheckError> {
    if context.is_pure_backend() {
        tracing::debug!(app_type = %context.app_type, "skipping location checks");
        return Ok(Vec::new());
    }

    let products = products_to_check(manifest, config);
    let mut issues = Vec::new();

    for &(name, product) in &products {
        if product.location.is_empty() {
            issues.push(ValidationIssue::MissingLocations {
                product: name.to_string(),
            });
            continue;
        }

        let rule = rule_for(tables, name)?;
        let invalid: Vec<String> = product
            .location
            .keys()
            .filter(|location| !rule.allows(location))
            .cloned()
            .collect();

        if !invalid.is_empty() {
            issues.push(ValidationIssue::InvalidLocations {
                product: name.to_string(),
                locations: invalid,
            });
        }
    }

    if !issues.is_empty() || !assets.root_exists() {
        return Ok(issues);
    }

    check_location_fields(&products, tables, config, assets)
}

fn check_location_fields(
    products: &[(&str, &ProductConfig)],
    tables: &ReferenceTables,
    config: &ValidatorConfig,
    assets: &dyn AssetStore,
) -> Result<Vec<ValidationIssue>, LocationCheckError> {
    let expected = config.icon_size();
    let mut issues = Vec::new();

    for &(product, declared) in products {
        let rule = rule_for(tables, product)?;

        for (location, fields) in &declared.location {
            let pair = || (product.to_string(), location.to_string());

            match fields.url() {
                None => {
                    let (product, location) = pair();
                    issues.push(ValidationIssue::MissingUrl { product, location });
                }
                Some(template) if !assets.exists(template) => {
                    let (product, location) = pair();
                    issues.push(ValidationIssue::TemplateNotFound {
                        product,
                        location,
                        template: template.to_string(),
                    });
                }
                Some(_) => {}
            }

            if !rule.needs_icon(location) {
                continue;
            }

            match fields.icon() {
                None => {
                    let (product, location) = pair();
                    issues.push(ValidationIssue::MissingIcon { product, location });
                }
                Some(icon) if !assets.exists(icon) => {
                    let (product, location) = pair();
                    issues.push(ValidationIssue::IconNotFound {
                        product,
                        location,
                        icon: icon.to_string(),
                    });
                }
                Some(icon) => {
                    let found = assets.image_dimensions(icon)?;
                    if found != expected {
                        let (product, location) = pair();
                        issues.push(ValidationIssue::InvalidIconDimension {
                            product,
                            location,
                            icon: icon.to_string(),
                            found,
                        });
                    }
                }
            }
        }
    }

    Ok(issues)
}
