//! Project-level validator settings (`appvet.toml`)

use super::ValidatorConfig;
use crate::storage::paths;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Load settings from an explicit file
pub fn load_settings_file(path: &Path) -> Result<ValidatorConfig, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Numeric key of a `major.minor` platform version
fn platform_key(version: &str) -> Result<Vec<u64>, SettingsError> {
    version
        .split('.')
        .map(|part| part.parse::<u64>())
        .collect::<Result<_, _>>()
        .map_err(|_| SettingsError::Invalid(format!("invalid platform version: {}", version)))
}

/// Parse settings from TOML, filling gaps with defaults
///
/// Platform versions are stored oldest first whatever order the file uses.
pub fn parse_settings(content: &str) -> Result<ValidatorConfig, SettingsError> {
    let mut config: ValidatorConfig = toml::from_str(content)?;

    let mut keyed = config
        .supported_platforms
        .drain(..)
        .map(|v| platform_key(&v).map(|key| (key, v)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort();
    keyed.dedup();
    config.supported_platforms = keyed.into_iter().map(|(_, v)| v).collect();

    if config.supported_platforms.is_empty() {
        return Err(SettingsError::Invalid(
            "supported_platforms must not be empty".into(),
        ));
    }
    if config.app_dir.is_empty() {
        return Err(SettingsError::Invalid("app_dir must not be empty".into()));
    }

    Ok(config)
}

/// Load the project's settings, or defaults when the project has none
pub fn load_project_settings(project: &Path) -> Result<ValidatorConfig, SettingsError> {
    let settings_path = paths::project_settings_path(project);

    if !settings_path.exists() {
        return Ok(ValidatorConfig::default());
    }

    load_settings_file(&settings_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_settings("icon_width = 128\n").unwrap();
        assert_eq!(config.icon_width, 128);
        assert_eq!(config.icon_height, 64);
        assert_eq!(config.supported_platforms, vec!["2.0", "2.1"]);
        assert_eq!(config.deprecated_platform(), Some("2.0"));
        assert_eq!(config.latest_platform(), Some("2.1"));
    }

    #[test]
    fn rejects_empty_platform_list() {
        let err = parse_settings("supported_platforms = []\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn platforms_are_ordered_oldest_first() {
        let config = parse_settings("supported_platforms = [\"2.10\", \"2.1\", \"2.9\"]\n").unwrap();
        assert_eq!(config.supported_platforms, vec!["2.1", "2.9", "2.10"]);
        assert_eq!(config.deprecated_platform(), Some("2.1"));
        assert_eq!(config.latest_platform(), Some("2.10"));

        let config = parse_settings("supported_platforms = [\"2.1\", \"2.0\"]\n").unwrap();
        assert_eq!(config.deprecated_platform(), Some("2.0"));
    }

    #[test]
    fn rejects_non_numeric_platform() {
        let err = parse_settings("supported_platforms = [\"2.x\"]\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn project_without_settings_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_settings(dir.path()).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn project_settings_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("appvet.toml"),
            "supported_platforms = [\"2.1\", \"2.2\"]\napp_dir = \"src\"\n",
        )
        .unwrap();

        let config = load_project_settings(dir.path()).unwrap();
        assert!(config.is_supported_platform("2.2"));
        assert!(!config.is_supported_platform("2.0"));
        assert_eq!(config.app_dir, "src");
    }
}
