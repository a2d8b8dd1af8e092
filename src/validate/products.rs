//! Product and omni-app checks

use super::ValidationIssue;
use crate::addon::ReferenceTables;
use crate::manifest::AppManifest;

/// At least one product, and only products the addon knows about
pub fn check_products(manifest: &AppManifest, tables: &ReferenceTables) -> Vec<ValidationIssue> {
    if manifest.product.is_empty() {
        return vec![ValidationIssue::NoProduct];
    }

    let unknown: Vec<String> = manifest
        .product_names()
        .filter(|name| !tables.locations.contains(name))
        .map(str::to_string)
        .collect();

    if unknown.is_empty() {
        Vec::new()
    } else {
        vec![ValidationIssue::InvalidProducts { products: unknown }]
    }
}

/// Omni apps may only target the addon's omni products
pub fn check_omni_products(
    manifest: &AppManifest,
    tables: &ReferenceTables,
) -> Vec<ValidationIssue> {
    let unsupported: Vec<String> = manifest
        .product_names()
        .filter(|name| !tables.is_omni_product(name))
        .map(str::to_string)
        .collect();

    if unsupported.is_empty() {
        return Vec::new();
    }

    vec![ValidationIssue::UnsupportedOmniProducts {
        products: unsupported,
        allowed: tables.omni_products.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::{ProductLocationRule, ProductLocations};
    use crate::manifest::ProductConfig;
    use std::collections::BTreeMap;

    fn tables() -> ReferenceTables {
        let mut rules = BTreeMap::new();
        rules.insert("freshdesk".to_string(), ProductLocationRule::default());
        rules.insert("freshservice".to_string(), ProductLocationRule::default());
        rules.insert("freshsales".to_string(), ProductLocationRule::default());
        ReferenceTables::new(
            ProductLocations::new(rules),
            vec!["freshdesk".into(), "freshservice".into()],
        )
    }

    fn manifest_with(products: &[&str]) -> AppManifest {
        AppManifest {
            product: products
                .iter()
                .map(|p| (p.to_string(), ProductConfig::default()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn no_products() {
        assert_eq!(
            check_products(&manifest_with(&[]), &tables()),
            vec![ValidationIssue::NoProduct]
        );
    }

    #[test]
    fn lists_every_unknown_product() {
        let issues = check_products(
            &manifest_with(&["freshdesk", "freshpost", "freshbooks"]),
            &tables(),
        );
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidProducts {
                products: vec!["freshbooks".into(), "freshpost".into()],
            }]
        );
    }

    #[test]
    fn known_products_pass() {
        assert!(check_products(&manifest_with(&["freshdesk", "freshsales"]), &tables()).is_empty());
    }

    #[test]
    fn omni_rejects_products_outside_allowed_list() {
        let issues = check_omni_products(&manifest_with(&["freshdesk", "freshsales"]), &tables());
        assert_eq!(
            issues,
            vec![ValidationIssue::UnsupportedOmniProducts {
                products: vec!["freshsales".into()],
                allowed: vec!["freshdesk".into(), "freshservice".into()],
            }]
        );
        assert!(
            check_omni_products(&manifest_with(&["freshdesk", "freshservice"]), &tables())
                .is_empty()
        );
    }
}
