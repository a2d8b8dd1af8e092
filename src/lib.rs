//! appvet - app manifest validator
//!
//! Checks an app's `manifest.json` against the products, locations and
//! platform versions an addon supports, the files the app ships, and the
//! rules for whitelisted domains.

pub mod addon;
pub mod cli;
pub mod manifest;
pub mod settings;
pub mod storage;
pub mod validate;

pub use manifest::AppManifest;
pub use validate::{ValidationContext, ValidationIssue, ValidationPhase, ValidationReport, Validator};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "appvet";
