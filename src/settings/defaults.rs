//! Default validator settings

use crate::storage::Dimensions;
use serde::{Deserialize, Serialize};

/// Platform versions an app may declare
pub const SUPPORTED_PLATFORMS: &[&str] = &["2.0", "2.1"];

/// Required icon size in pixels
pub const ICON_SIZE: Dimensions = Dimensions::new(64, 64);

/// Directory inside the project that holds templates and icons
pub const APP_CONTENT_DIR: &str = "app";

/// Tunables for a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Accepted `platform-version` values, oldest first
    pub supported_platforms: Vec<String>,
    pub icon_width: u32,
    pub icon_height: u32,
    pub app_dir: String,
}

impl ValidatorConfig {
    pub fn icon_size(&self) -> Dimensions {
        Dimensions::new(self.icon_width, self.icon_height)
    }

    /// Oldest supported platform, which is on its way out
    pub fn deprecated_platform(&self) -> Option<&str> {
        self.supported_platforms.first().map(String::as_str)
    }

    pub fn latest_platform(&self) -> Option<&str> {
        self.supported_platforms.last().map(String::as_str)
    }

    pub fn is_supported_platform(&self, version: &str) -> bool {
        self.supported_platforms.iter().any(|v| v == version)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            supported_platforms: SUPPORTED_PLATFORMS.iter().map(|v| v.to_string()).collect(),
            icon_width: ICON_SIZE.width,
            icon_height: ICON_SIZE.height,
            app_dir: APP_CONTENT_DIR.to_string(),
        }
    }
}
