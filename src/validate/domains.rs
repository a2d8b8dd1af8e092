//! Whitelisted domain checks

use super::{DomainViolation, ValidationIssue, ValidationPhase};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `https://*.example.com`: one wildcard label in front of a concrete domain
static WILDCARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https://)\*+([-.][a-z0-9]+)*\.[a-z]*$").expect("wildcard pattern is valid")
});

static IP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.|$)){4}\b")
        .expect("ip pattern is valid")
});

/// Installation parameter placeholders such as `<%= iparam.subdomain %>`
static TEMPLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<%=\s*.*\s*%>").expect("template pattern is valid"));

/// Stand-in host label used while parsing templated domains
const TEMPLATE_STANDIN: &str = "abc";

/// A whitelisted entry split as written, without normalizing the host
#[derive(Debug, Clone, PartialEq, Eq)]
struct DomainParts<'a> {
    scheme: Option<&'a str>,
    host: Option<String>,
    /// Path and query, fragment excluded
    path: &'a str,
}

impl<'a> DomainParts<'a> {
    fn split(entry: &'a str) -> Self {
        let Some((scheme, rest)) = entry.split_once("://") else {
            // No authority: everything before the fragment reads as a path
            let path = entry.split('#').next().unwrap_or_default();
            return Self {
                scheme: None,
                host: None,
                path,
            };
        };

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, remainder) = rest.split_at(authority_end);
        let path = remainder.split('#').next().unwrap_or_default();

        let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = if host_port.starts_with('[') {
            host_port.split_inclusive(']').next().unwrap_or(host_port)
        } else {
            match host_port.rsplit_once(':') {
                Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
                _ => host_port,
            }
        };

        Self {
            scheme: Some(scheme),
            host: Some(host.to_ascii_lowercase()).filter(|h| !h.is_empty()),
            path,
        }
    }

    fn has_path(&self) -> bool {
        !self.path.is_empty() && self.path != "/"
    }
}

/// Classify one whitelisted domain
///
/// A domain can break several rules at once. Wildcard entries are only
/// checked against the wildcard shape.
pub fn classify_domain(domain: &str, phase: ValidationPhase) -> Vec<DomainViolation> {
    if domain.contains('*') {
        return if WILDCARD_PATTERN.is_match(domain) {
            Vec::new()
        } else {
            vec![DomainViolation::MalformedWildcard]
        };
    }

    let resolved = TEMPLATE_PATTERN.replace_all(domain, TEMPLATE_STANDIN);
    let parts = DomainParts::split(&resolved);
    let mut violations = Vec::new();

    let is_localhost = parts.host.as_deref() == Some("localhost");
    let is_http = parts
        .scheme
        .is_some_and(|s| s.eq_ignore_ascii_case("http"));

    if is_localhost && is_http && phase == ValidationPhase::Run {
        return violations;
    }

    if parts.has_path() {
        violations.push(DomainViolation::HasPath);
    } else if domain.ends_with('/') {
        violations.push(DomainViolation::TrailingSlash);
    }
    if is_localhost {
        violations.push(DomainViolation::Localhost);
    }
    if !domain.starts_with("https://") {
        violations.push(DomainViolation::NotHttps);
    }
    if parts.host.as_deref().is_some_and(|h| IP_PATTERN.is_match(h)) {
        violations.push(DomainViolation::IpAddress);
    }

    violations
}

/// One issue per violated rule, each listing every offending domain in order
pub fn check_whitelisted_domains(
    domains: &[String],
    phase: ValidationPhase,
) -> Vec<ValidationIssue> {
    let mut buckets: BTreeMap<DomainViolation, Vec<String>> = BTreeMap::new();

    for domain in domains {
        for violation in classify_domain(domain, phase) {
            buckets.entry(violation).or_default().push(domain.clone());
        }
    }

    DomainViolation::ALL
        .into_iter()
        .filter_map(|violation| {
            buckets
                .remove(&violation)
                .map(|domains| ValidationIssue::Domains { violation, domains })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use DomainViolation::*;

    fn classify(domain: &str) -> Vec<DomainViolation> {
        classify_domain(domain, ValidationPhase::PrePackage)
    }

    #[test]
    fn clean_https_domain() {
        assert!(classify("https://example.com").is_empty());
        assert!(classify("https://api.example.com:8443").is_empty());
    }

    #[test]
    fn trailing_slash_and_plain_http() {
        assert_eq!(classify("http://example.com/"), vec![TrailingSlash, NotHttps]);
    }

    #[test]
    fn path_wins_over_trailing_slash() {
        assert_eq!(classify("https://example.com/api/"), vec![HasPath]);
        assert_eq!(classify("https://example.com?key=1"), vec![HasPath]);
    }

    #[test]
    fn ip_literal_host() {
        assert_eq!(classify("https://1.2.3.4"), vec![IpAddress]);
        assert_eq!(classify("http://10.0.0.1:8080"), vec![NotHttps, IpAddress]);
    }

    #[test]
    fn localhost_only_allowed_over_http_at_run_time() {
        assert!(classify_domain("http://localhost:10001", ValidationPhase::Run).is_empty());
        assert_eq!(
            classify_domain("http://localhost:10001", ValidationPhase::PrePackage),
            vec![Localhost, NotHttps]
        );
        assert_eq!(
            classify_domain("https://localhost", ValidationPhase::Run),
            vec![Localhost]
        );
    }

    #[test]
    fn template_placeholders_are_resolved_before_parsing() {
        assert!(classify("https://<%= iparam.subdomain %>.freshdesk.com").is_empty());
        assert_eq!(
            classify("https://<%= iparam.subdomain %>.freshdesk.com/api"),
            vec![HasPath]
        );
    }

    #[test]
    fn wildcards() {
        assert!(classify("https://*.freshdesk.com").is_empty());
        assert!(classify("https://*-eu.freshdesk.com").is_empty());
        assert_eq!(classify("https://*.*.freshdesk.com"), vec![MalformedWildcard]);
        assert_eq!(classify("http://*.freshdesk.com"), vec![MalformedWildcard]);
        assert_eq!(classify("https://*.freshdesk.com/"), vec![MalformedWildcard]);
    }

    #[test]
    fn hosts_are_judged_as_written() {
        for domain in ["https://1.2.3", "https://1234567", "https://0x7f.1", "https://999.1.1.1"] {
            assert!(classify(domain).is_empty(), "{domain}");
        }
        assert_eq!(classify("https://user@10.1.2.3:8443"), vec![IpAddress]);
    }

    #[test]
    fn odd_hosts_without_path_are_not_paths() {
        assert!(classify("https://exa mple.com").is_empty());
        assert!(classify("https://my%host.com").is_empty());
        assert!(classify("https://example.com#top").is_empty());
        assert_eq!(classify("https://exa mple.com/api"), vec![HasPath]);
    }

    #[test]
    fn scheme_less_entry() {
        assert_eq!(classify("example.com"), vec![HasPath, NotHttps]);
    }

    #[test]
    fn aggregates_one_issue_per_violation() {
        let domains = vec![
            "http://example.com/".to_string(),
            "https://1.2.3.4".to_string(),
            "http://other.com".to_string(),
        ];
        let issues = check_whitelisted_domains(&domains, ValidationPhase::PrePackage);

        assert_eq!(
            issues,
            vec![
                ValidationIssue::Domains {
                    violation: IpAddress,
                    domains: vec!["https://1.2.3.4".into()],
                },
                ValidationIssue::Domains {
                    violation: TrailingSlash,
                    domains: vec!["http://example.com/".into()],
                },
                ValidationIssue::Domains {
                    violation: NotHttps,
                    domains: vec!["http://example.com/".into(), "http://other.com".into()],
                },
            ]
        );
    }

    #[test]
    fn empty_list_is_clean() {
        assert!(check_whitelisted_domains(&[], ValidationPhase::Run).is_empty());
    }
}
