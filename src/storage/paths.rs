//! Directory path management for the packaging tool's addon data

use std::path::{Path, PathBuf};

/// Get the tool's home directory (~/.fdk)
pub fn fdk_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fdk")
}

/// Get the addons directory
pub fn addons_dir() -> PathBuf {
    fdk_home().join("addon")
}

/// Get the directory of a specific addon version
pub fn addon_dir(version: &str) -> PathBuf {
    addons_dir().join(format!("addon-{}", version))
}

/// Get the product locations table inside an addon directory
pub fn product_locations_path(addon_dir: &Path) -> PathBuf {
    addon_dir.join("locations").join("product_locations.json")
}

/// Get the product info file inside an addon directory
pub fn product_info_path(addon_dir: &Path) -> PathBuf {
    addon_dir.join("product_info.json")
}

/// Get the default validator settings file for a project
pub fn project_settings_path(project: &Path) -> PathBuf {
    project.join(format!("{}.toml", crate::APP_NAME))
}
