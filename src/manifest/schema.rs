//! Manifest schema definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete app manifest structure (`manifest.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppManifest {
    #[serde(rename = "platform-version", default)]
    pub platform_version: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub product: BTreeMap<String, ProductConfig>,
    #[serde(rename = "whitelisted-domains", default)]
    pub whitelisted_domains: Vec<String>,
}

impl AppManifest {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Declared product names, in table order
    pub fn product_names(&self) -> impl Iterator<Item = &str> {
        self.product.keys().map(String::as_str)
    }
}

/// A product the app is built for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductConfig {
    #[serde(default)]
    pub location: BTreeMap<String, LocationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<serde_json::Value>,
}

impl ProductConfig {
    pub fn has_events(&self) -> bool {
        self.events.is_some()
    }
}

/// A UI placement inside a product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl LocationConfig {
    /// Template path, treating an empty string as absent
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Icon path, treating an empty string as absent
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|i| !i.is_empty())
    }
}
