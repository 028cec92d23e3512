// src/validation/host.rs

//! Host classification and base-domain extraction.
//!
//! Classification uses a deliberately simple label-count heuristic: deciding
//! between IP, domain and subdomain does not need the public suffix list.
//! PSL-aware splitting only matters when reducing a subdomain to its
//! registrable domain, so the list is consulted there and nowhere else.

use crate::enums::TargetType;
use crate::error::ScanError;
use crate::validation::ip::is_valid_ipv4;
use crate::validation::url::{extract_host_name, normalize_url};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use tldextract::{TldExtractor, TldOption};
use tracing::debug;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// PSL-backed extractor, built once and shared by all lookups.
static TLD_EXTRACTOR: Lazy<TldExtractor> = Lazy::new(|| TldOption::default().build());

/// The outcome of classifying one raw target value.
///
/// Created fresh per classification call and immutable afterward; it is a
/// transient validation artifact, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostClassification {
    /// Original input value.
    pub raw_value: String,

    /// Normalized and cleaned value, scheme included.
    pub normalized_value: String,

    /// The type of host, derived solely from the normalized value.
    #[serde(rename = "type")]
    pub target_type: TargetType,

    /// Human-readable sub-kind: "IPv4", "Top-Level Domain" or "Subdomain".
    pub classification: String,

    /// IP addresses the host resolved to, when a caller chose to resolve it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resolved_ips: Vec<String>,
}

/// Classifies a raw target value as an IPv4 address, a top-level domain, or a
/// subdomain.
///
/// A bare token without a dot (such as `localhost`) and the empty string are
/// rejected: nothing downstream can work with a host that is neither an
/// address nor at least a two-label name.
pub fn classify_host_value(value: &str) -> Result<HostClassification, ScanError> {
    let normalized_value = normalize_url(value);

    // Remove the scheme (once, not repeatedly) to get the bare candidate.
    let base_value = normalized_value
        .strip_prefix("http://")
        .or_else(|| normalized_value.strip_prefix("https://"))
        .unwrap_or(&normalized_value);

    if is_valid_ipv4(base_value) {
        return Ok(HostClassification {
            raw_value: value.to_string(),
            normalized_value,
            target_type: TargetType::Ip,
            classification: "IPv4".to_string(),
            resolved_ips: Vec::new(),
        });
    }

    let domain = extract_host_name(&normalized_value)
        .map_err(|e| ScanError::Validation(format!("failed to extract domain: {e}")))?;

    // The label count decides between domain and subdomain.
    let label_count = domain.split('.').count();
    match label_count {
        2 => Ok(HostClassification {
            raw_value: value.to_string(),
            normalized_value,
            target_type: TargetType::Domain,
            classification: "Top-Level Domain".to_string(),
            resolved_ips: Vec::new(),
        }),
        n if n > 2 => Ok(HostClassification {
            raw_value: value.to_string(),
            normalized_value,
            target_type: TargetType::Subdomain,
            classification: "Subdomain".to_string(),
            resolved_ips: Vec::new(),
        }),
        _ => Err(ScanError::Validation(format!("invalid domain format: {domain}"))),
    }
}

impl HostClassification {
    /// Returns the registrable domain for this host.
    ///
    /// For IPs and top-level domains the hostname is returned unchanged; a
    /// subdomain is reduced to effective TLD + one label, so
    /// `api.service.example.co.uk` yields `example.co.uk`.
    pub fn base_domain(&self) -> Result<String, ScanError> {
        let host = extract_host_name(&self.normalized_value)?;

        if self.target_type != TargetType::Subdomain {
            return Ok(host);
        }

        registrable_domain(&host)
    }
}

/// Reduces a hostname to its registrable domain using public-suffix-list
/// semantics.
fn registrable_domain(host: &str) -> Result<String, ScanError> {
    let extracted = TLD_EXTRACTOR
        .extract(host)
        .map_err(|e| ScanError::Validation(format!("failed to extract base domain of '{host}': {e}")))?;

    match (extracted.domain, extracted.suffix) {
        (Some(domain), Some(suffix)) => Ok(format!("{domain}.{suffix}")),
        (Some(domain), None) => Ok(domain),
        _ => Err(ScanError::Validation(format!("no registrable domain in '{host}'"))),
    }
}

/// Checks that a domain actually resolves, bounded by `limit`.
///
/// This is a fallible I/O boundary, not a pure function: a domain that fails
/// to resolve yields [`ScanError::Communication`] (an invalid domain, distinct
/// from any parsing error) and exceeding the budget yields
/// [`ScanError::Timeout`]. Retry policy, if any, belongs to the caller.
pub async fn resolve_domain(domain: &str, limit: Duration) -> Result<Vec<IpAddr>, ScanError> {
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

    match tokio::time::timeout(limit, resolver.lookup_ip(domain)).await {
        Err(_) => Err(ScanError::Timeout(limit)),
        Ok(Err(e)) => Err(ScanError::Communication(format!("invalid domain '{domain}': {e}"))),
        Ok(Ok(lookup)) => {
            let addresses: Vec<IpAddr> = lookup.iter().collect();
            debug!(domain, count = addresses.len(), "domain resolved");
            Ok(addresses)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_addresses_classify_as_ip() {
        let hc = classify_host_value("192.168.1.1").unwrap();
        assert_eq!(hc.target_type, TargetType::Ip);
        assert_eq!(hc.classification, "IPv4");
        assert_eq!(hc.raw_value, "192.168.1.1");
        assert_eq!(hc.normalized_value, "http://192.168.1.1");
    }

    #[test]
    fn two_label_hosts_classify_as_domain() {
        let hc = classify_host_value("example.com").unwrap();
        assert_eq!(hc.target_type, TargetType::Domain);
        assert_eq!(hc.classification, "Top-Level Domain");
        assert_eq!(hc.normalized_value, "http://example.com");
    }

    #[test]
    fn supplied_scheme_is_preserved() {
        let http = classify_host_value("http://example.com").unwrap();
        assert_eq!(http.target_type, TargetType::Domain);
        assert_eq!(http.normalized_value, "http://example.com");

        let https = classify_host_value("https://example.com").unwrap();
        assert_eq!(https.target_type, TargetType::Domain);
        assert_eq!(https.normalized_value, "https://example.com");
    }

    #[test]
    fn deeper_hosts_classify_as_subdomain() {
        let www = classify_host_value("www.example.com").unwrap();
        assert_eq!(www.target_type, TargetType::Subdomain);
        assert_eq!(www.classification, "Subdomain");

        let deep = classify_host_value("api.service.example.co.uk").unwrap();
        assert_eq!(deep.target_type, TargetType::Subdomain);
    }

    #[test]
    fn single_label_and_empty_inputs_are_rejected() {
        assert!(matches!(classify_host_value("localhost"), Err(ScanError::Validation(_))));
        assert!(matches!(classify_host_value(""), Err(ScanError::Validation(_))));
    }

    #[test]
    fn doubled_scheme_is_not_unwrapped_to_an_ip() {
        // Only one scheme prefix is stripped, so the inner "http://" stays
        // part of the candidate and the value fails as malformed instead of
        // classifying as an IP.
        assert!(matches!(
            classify_host_value("http://http://192.168.1.1"),
            Err(ScanError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn resolve_domain_maps_an_exhausted_budget_to_timeout() {
        // A zero budget elapses before any resolution can complete, so this
        // pins the deadline arm without touching the network.
        match resolve_domain("example.com", Duration::ZERO).await {
            Err(ScanError::Timeout(limit)) => assert_eq!(limit, Duration::ZERO),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[test]
    fn base_domain_is_identity_for_domains_and_ips() {
        let domain = classify_host_value("example.com").unwrap();
        assert_eq!(domain.base_domain().unwrap(), "example.com");

        let ip = classify_host_value("10.0.0.1").unwrap();
        assert_eq!(ip.base_domain().unwrap(), "10.0.0.1");
    }

    #[test]
    fn base_domain_reduces_subdomains_to_registrable_domain() {
        let www = classify_host_value("www.example.com").unwrap();
        assert_eq!(www.base_domain().unwrap(), "example.com");

        let multi_part_suffix = classify_host_value("api.service.example.co.uk").unwrap();
        assert_eq!(multi_part_suffix.base_domain().unwrap(), "example.co.uk");
    }

    #[test]
    fn classification_serializes_with_wire_field_names() {
        let hc = classify_host_value("www.example.com").unwrap();
        let value = serde_json::to_value(&hc).unwrap();
        assert_eq!(value["type"], "Subdomain");
        assert_eq!(value["normalized_value"], "http://www.example.com");
        // Empty resolved_ips never hits the wire.
        assert!(value.get("resolved_ips").is_none());
    }
}
