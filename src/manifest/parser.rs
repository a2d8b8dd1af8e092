//! Manifest parsing functions

use super::schema::AppManifest;
use std::path::Path;
use thiserror::Error;

/// File name of the manifest inside a project
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Manifest not found: {0}")]
    NotFound(String),
}

/// Parse a manifest from a JSON file
pub fn parse_manifest_file(path: &Path) -> Result<AppManifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_manifest_str(&content)
}

/// Parse a manifest from a JSON string
pub fn parse_manifest_str(content: &str) -> Result<AppManifest, ManifestError> {
    let manifest: AppManifest = serde_json::from_str(content)?;
    Ok(manifest)
}

/// Load `manifest.json` from a project directory
pub fn load_project_manifest(project: &Path) -> Result<AppManifest, ManifestError> {
    parse_manifest_file(&project.join(MANIFEST_FILE))
}
