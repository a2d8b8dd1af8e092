//! Validation findings and their user-facing messages

use crate::storage::Dimensions;
use thiserror::Error;

/// Ways a whitelisted domain can be unacceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DomainViolation {
    IpAddress,
    TrailingSlash,
    NotHttps,
    HasPath,
    Localhost,
    MalformedWildcard,
}

impl DomainViolation {
    /// Reporting order
    pub const ALL: [DomainViolation; 6] = [
        DomainViolation::IpAddress,
        DomainViolation::TrailingSlash,
        DomainViolation::NotHttps,
        DomainViolation::HasPath,
        DomainViolation::Localhost,
        DomainViolation::MalformedWildcard,
    ];

    pub fn message(self) -> &'static str {
        match self {
            Self::IpAddress => "Whitelisted domains must not contain IP addresses",
            Self::TrailingSlash => "Whitelisted domains must not end with a '/'",
            Self::NotHttps => "Whitelisted domains must use HTTPS",
            Self::HasPath => "Whitelisted domains must not have path",
            Self::Localhost => "Whitelisted domains must not be localhost",
            Self::MalformedWildcard => "Whitelisted domains must not have more than one subdomain",
        }
    }
}

/// A single problem found in a manifest
///
/// `Display` gives the message shown to the developer; the fields carry the
/// product, location or domain it refers to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Atleast one product must be mentioned in manifest.json")]
    NoProduct,

    #[error("Invalid product(s) mentioned in manifest.json: {}", .products.join(","))]
    InvalidProducts { products: Vec<String> },

    #[error("Invalid platform version mentioned in manifest.json - {version}")]
    InvalidPlatform { version: String },

    #[error(
        "Omniapps is available only for - {}. Unsupported product(s): {}",
        .allowed.join(","),
        .products.join(",")
    )]
    UnsupportedOmniProducts {
        products: Vec<String>,
        allowed: Vec<String>,
    },

    #[error("Missing locations for product: {product}")]
    MissingLocations { product: String },

    #[error(
        "Invalid location(s) mentioned in manifest.json: {product} - {}",
        .locations.join(",")
    )]
    InvalidLocations {
        product: String,
        locations: Vec<String>,
    },

    #[error("Url is either not mentioned or empty in {product}/{location}")]
    MissingUrl { product: String, location: String },

    #[error("Template file '{template}' mentioned in {product}/{location} is not found in app folder")]
    TemplateNotFound {
        product: String,
        location: String,
        template: String,
    },

    #[error("Icon is either not mentioned or empty in {product}/{location}")]
    MissingIcon { product: String, location: String },

    #[error("Icon '{icon}' mentioned in {product}/{location} is not found in app folder")]
    IconNotFound {
        product: String,
        location: String,
        icon: String,
    },

    #[error("Invalid dimension of icon '{icon}' for {product}/{location}")]
    InvalidIconDimension {
        product: String,
        location: String,
        icon: String,
        found: Dimensions,
    },

    #[error("Invalid manifest / folder configuration for app")]
    FolderConfiguration,

    #[error("{}: {}", .violation.message(), .domains.join(","))]
    Domains {
        violation: DomainViolation,
        domains: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_fields_join_with_commas() {
        let issue = ValidationIssue::InvalidProducts {
            products: vec!["freshbooks".into(), "freshpost".into()],
        };
        assert_eq!(
            issue.to_string(),
            "Invalid product(s) mentioned in manifest.json: freshbooks,freshpost"
        );

        let issue = ValidationIssue::Domains {
            violation: DomainViolation::NotHttps,
            domains: vec!["http://a.com".into(), "ftp://b.com".into()],
        };
        assert_eq!(
            issue.to_string(),
            "Whitelisted domains must use HTTPS: http://a.com,ftp://b.com"
        );
    }

    #[test]
    fn location_messages_name_the_pair() {
        let issue = ValidationIssue::InvalidIconDimension {
            product: "freshdesk".into(),
            location: "ticket_sidebar".into(),
            icon: "icon.png".into(),
            found: Dimensions::new(32, 32),
        };
        assert_eq!(
            issue.to_string(),
            "Invalid dimension of icon 'icon.png' for freshdesk/ticket_sidebar"
        );
    }
}
