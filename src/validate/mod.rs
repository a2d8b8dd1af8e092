//! Manifest validation
//!
//! Each checker returns a flat list of [`ValidationIssue`]s. [`Validator`]
//! runs them in a fixed order and concatenates the results; an empty report
//! means the manifest is valid.

mod domains;
mod issue;
mod locations;
mod platform;
mod products;

pub use domains::*;
pub use issue::*;
pub use locations::*;
pub use platform::*;
pub use products::*;

use crate::addon::ReferenceTables;
use crate::manifest::AppManifest;
use crate::settings::ValidatorConfig;
use crate::storage::AssetStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When validation happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPhase {
    /// Before the app is packed for upload
    PrePackage,
    /// While the app is served locally
    #[default]
    Run,
}

impl fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrePackage => write!(f, "pre_package"),
            Self::Run => write!(f, "run"),
        }
    }
}

/// How the host tool is invoking the validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// App type reported by the host tool, e.g. `frontend` or `purebackend`
    pub app_type: String,
    pub phase: ValidationPhase,
}

impl ValidationContext {
    pub fn new(app_type: impl Into<String>, phase: ValidationPhase) -> Self {
        Self {
            app_type: app_type.into(),
            phase,
        }
    }

    /// Backend-only apps have no frontend locations
    pub fn is_pure_backend(&self) -> bool {
        self.app_type.contains("purebackend")
    }
}

/// Outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    /// Notices that do not make the manifest invalid
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Error messages in reporting order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Runs every manifest check against one set of reference tables
#[derive(Debug, Clone)]
pub struct Validator {
    tables: ReferenceTables,
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(tables: ReferenceTables, config: ValidatorConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a manifest against the tables and the app's files
    ///
    /// Location checks only run when the product check passed.
    pub fn validate(
        &self,
        manifest: &AppManifest,
        context: &ValidationContext,
        assets: &dyn AssetStore,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        let product_issues = check_products(manifest, &self.tables);
        let products_ok = product_issues.is_empty();
        report.issues.extend(product_issues);

        match check_platform(manifest, &self.config) {
            PlatformStatus::Supported => {}
            PlatformStatus::Deprecated(warning) => {
                tracing::warn!("{}", warning);
                report.warnings.push(warning);
            }
            PlatformStatus::Unsupported(issue) => report.issues.push(issue),
        }

        report
            .issues
            .extend(check_whitelisted_domains(&manifest.whitelisted_domains, context.phase));

        if products_ok {
            match check_locations(manifest, context, &self.tables, &self.config, assets) {
                Ok(issues) => report.issues.extend(issues),
                Err(e) => {
                    tracing::error!(error = %e, "location check failed");
                    report.issues.push(ValidationIssue::FolderConfiguration);
                }
            }
        }

        if manifest.has_feature("omni") {
            report.issues.extend(check_omni_products(manifest, &self.tables));
        }

        tracing::debug!(
            phase = %context.phase,
            issues = report.issues.len(),
            warnings = report.warnings.len(),
            "manifest validated"
        );

        report
    }
}
