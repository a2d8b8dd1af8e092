//! Validate command implementation

use crate::addon::{AddonError, ReferenceTables, load_addon_version, load_tables};
use crate::manifest::{ManifestError, load_project_manifest};
use crate::settings::{SettingsError, ValidatorConfig, load_project_settings, load_settings_file};
use crate::storage::AppFolder;
use crate::validate::{ValidationContext, ValidationPhase, ValidationReport, Validator};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Addon error: {0}")]
    AddonError(#[from] AddonError),

    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),
}

/// Where the reference tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonSource {
    /// An addon directory on disk
    Dir(PathBuf),
    /// An installed addon version under the tool's home directory
    Version(String),
}

impl AddonSource {
    pub fn load(&self) -> Result<ReferenceTables, AddonError> {
        match self {
            Self::Dir(dir) => load_tables(dir),
            Self::Version(version) => load_addon_version(version),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub project: PathBuf,
    pub addon: AddonSource,
    pub settings: Option<PathBuf>,
    pub context: ValidationContext,
}

impl ValidateOptions {
    pub fn new(project: impl Into<PathBuf>, addon: AddonSource) -> Self {
        Self {
            project: project.into(),
            addon,
            settings: None,
            context: ValidationContext::default(),
        }
    }

    pub fn with_settings(mut self, path: Option<PathBuf>) -> Self {
        self.settings = path;
        self
    }

    pub fn with_context(mut self, app_type: &str, phase: ValidationPhase) -> Self {
        self.context = ValidationContext::new(app_type, phase);
        self
    }
}

fn load_config(project: &Path, explicit: Option<&Path>) -> Result<ValidatorConfig, SettingsError> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => load_project_settings(project),
    }
}

/// Load everything a project needs and validate its manifest
pub fn validate_project(options: &ValidateOptions) -> Result<ValidationReport, ValidateError> {
    let config = load_config(&options.project, options.settings.as_deref())?;
    let tables = options.addon.load()?;
    let manifest = load_project_manifest(&options.project)?;
    let assets = AppFolder::for_project(&options.project, &config.app_dir);

    let validator = Validator::new(tables, config);
    Ok(validator.validate(&manifest, &options.context, &assets))
}

/// Validate a project and print the result
///
/// Returns whether the manifest is valid.
pub fn run_validate(options: &ValidateOptions) -> Result<bool, ValidateError> {
    println!(
        "[{}] Validating {} ({})...",
        crate::APP_NAME,
        options.project.display(),
        options.context.phase
    );

    let report = validate_project(options)?;

    if report.is_valid() {
        println!("[{}] Manifest is valid.", crate::APP_NAME);
        return Ok(true);
    }

    println!();
    for message in report.messages() {
        println!("  - {}", message);
    }
    println!();
    println!(
        "[{}] Found {} problem(s) in the manifest.",
        crate::APP_NAME,
        report.issues.len()
    );

    Ok(false)
}
