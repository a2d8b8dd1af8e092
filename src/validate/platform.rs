//! Platform version check

use super::ValidationIssue;
use crate::manifest::AppManifest;
use crate::settings::ValidatorConfig;

/// Result of checking `platform-version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformStatus {
    Supported,
    /// Still accepted; carries the warning to show the developer
    Deprecated(String),
    Unsupported(ValidationIssue),
}

pub fn check_platform(manifest: &AppManifest, config: &ValidatorConfig) -> PlatformStatus {
    let version = manifest.platform_version.as_str();

    if !config.is_supported_platform(version) {
        return PlatformStatus::Unsupported(ValidationIssue::InvalidPlatform {
            version: version.to_string(),
        });
    }

    let (Some(oldest), Some(latest)) = (config.deprecated_platform(), config.latest_platform())
    else {
        return PlatformStatus::Supported;
    };

    if version == oldest && oldest != latest && manifest.product.len() > 1 {
        return PlatformStatus::Deprecated(format!(
            "Platform version {} will be deprecated shortly. Please update the app manifest to latest version ({}) to use latest features.",
            oldest, latest
        ));
    }

    PlatformStatus::Supported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ProductConfig;

    fn manifest(version: &str, products: usize) -> AppManifest {
        AppManifest {
            platform_version: version.to_string(),
            product: (0..products)
                .map(|i| (format!("product{}", i), ProductConfig::default()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn unsupported_versions() {
        let config = ValidatorConfig::default();
        for version in ["1.0", "2.2", "", "2"] {
            assert_eq!(
                check_platform(&manifest(version, 1), &config),
                PlatformStatus::Unsupported(ValidationIssue::InvalidPlatform {
                    version: version.to_string()
                })
            );
        }
    }

    #[test]
    fn oldest_version_warns_only_for_multi_product_apps() {
        let config = ValidatorConfig::default();
        assert_eq!(
            check_platform(&manifest("2.0", 1), &config),
            PlatformStatus::Supported
        );
        match check_platform(&manifest("2.0", 2), &config) {
            PlatformStatus::Deprecated(warning) => {
                assert!(warning.starts_with("Platform version 2.0 will be deprecated shortly."));
                assert!(warning.contains("(2.1)"));
            }
            other => panic!("expected deprecation, got {other:?}"),
        }
        assert_eq!(
            check_platform(&manifest("2.1", 3), &config),
            PlatformStatus::Supported
        );
    }
}
