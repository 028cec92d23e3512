// src/results/protection_score.rs

//! The per-target protection score: one normalized number in `[0, 1]`
//! summarizing how exposed a target looked across all four tools. Higher
//! means more protected.

use crate::results::dnslookup::DnsLookupResult;
use crate::results::harvester::HarvesterResult;
use crate::results::nmap::{severity_counts, NmapResult};
use crate::results::whois::WhoIsResult;
use tracing::debug;

const MAX_EMAILS: f64 = 50.0;
const MAX_SUBDOMAINS: f64 = 100.0;
const OPEN_PORTS_LIMIT: f64 = 50.0;
const VULN_LIMIT: f64 = 50.0;

/// Severity weights for the vulnerability sub-score.
const WEIGHT_LOW: u32 = 1;
const WEIGHT_MEDIUM: u32 = 3;
const WEIGHT_HIGH: u32 = 7;
const WEIGHT_CRITICAL: u32 = 15;

/// Combines the four tool results into one protection score in `[0, 1]`.
///
/// Each raw count is normalized to a 0–100 exposure sub-score, the sub-scores
/// are combined with fixed weights, and the weighted deduction is subtracted
/// from 100 and clamped. The function cannot fail: empty or missing
/// sub-results simply contribute nothing, since this is a best-effort summary
/// metric rather than a correctness-critical computation.
///
/// An OS fingerprint with accuracy above 1 incurs a flat penalty of 10. The
/// scanner reports accuracy as a 0–100 percentage, so any detected OS with
/// more than trivial confidence triggers it: being fingerprintable at all is
/// treated as an exposure signal.
pub fn protection_score(
    whois_result: &WhoIsResult,
    dns_lookup_result: &DnsLookupResult,
    harvester_result: &HarvesterResult,
    nmap_result: &NmapResult,
) -> f64 {
    let email_count = harvester_result.email_count();
    let subdomain_count = harvester_result.subdomain_count();
    let dns_record_count = dns_lookup_result.record_count();
    let whois_successful = whois_result.is_successful();
    let open_ports = nmap_result.open_ports().len();
    let vuln_counts = severity_counts(&nmap_result.all_vulnerabilities());

    let os_detection_penalty = if nmap_result.most_likely_os.accuracy > 1 {
        10.0
    } else {
        0.0
    };

    let email_score = normalize_score(email_count as f64, MAX_EMAILS);
    let subdomain_score = normalize_score(subdomain_count as f64, MAX_SUBDOMAINS);
    let whois_score = if whois_successful { 20.0 } else { 0.0 };
    // A single DNS record is already full exposure for this sub-score.
    let dns_score = normalize_score(dns_record_count as f64 * 10.0, 1.0);
    let open_ports_score = normalize_score(open_ports as f64, OPEN_PORTS_LIMIT);

    let weighted_vulns = vuln_counts.low * WEIGHT_LOW
        + vuln_counts.medium * WEIGHT_MEDIUM
        + vuln_counts.high * WEIGHT_HIGH
        + vuln_counts.critical * WEIGHT_CRITICAL;
    let vuln_score = normalize_score(weighted_vulns as f64, VULN_LIMIT);

    debug!(
        email_count,
        subdomain_count,
        dns_record_count,
        whois_successful,
        open_ports,
        vuln_low = vuln_counts.low,
        vuln_medium = vuln_counts.medium,
        vuln_high = vuln_counts.high,
        vuln_critical = vuln_counts.critical,
        "protection score input data"
    );
    debug!(
        email_score,
        subdomain_score,
        whois_score,
        dns_score,
        vuln_score,
        open_ports_score,
        os_detection_penalty,
        "protection score components"
    );

    // Higher sub-scores mean more exposure and decrease protection.
    let deduction = 0.2 * email_score
        + 0.2 * subdomain_score
        + 0.1 * whois_score
        + 0.1 * dns_score
        + 0.4 * vuln_score
        + 0.2 * open_ports_score
        + os_detection_penalty;

    ((100.0 - deduction) / 100.0).clamp(0.0, 1.0)
}

/// Normalizes a raw value against its cap to a 0–100 sub-score; values at or
/// beyond the cap saturate.
fn normalize_score(value: f64, max: f64) -> f64 {
    100.0 * (value / max).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{OwaspCategory, SeverityType};
    use crate::results::nmap::{OsData, PortData, Vulnerability};

    fn nmap_with(ports: Vec<PortData>, os_accuracy: i32) -> NmapResult {
        NmapResult {
            host_name: "example.com".to_string(),
            host_address: "93.184.216.34".to_string(),
            scanned_ports: ports,
            most_likely_os: OsData {
                name: if os_accuracy > 0 { "Linux".to_string() } else { String::new() },
                accuracy: os_accuracy,
                ..Default::default()
            },
        }
    }

    fn open_port_with_vulns(id: u16, vulns: Vec<Vulnerability>) -> PortData {
        PortData {
            id,
            state: "open".to_string(),
            vulnerabilities: vulns,
            ..Default::default()
        }
    }

    fn vuln(severity: SeverityType, cvss: f64) -> Vulnerability {
        Vulnerability {
            category: OwaspCategory::Injection,
            base_cvss_score: cvss,
            base_severity: severity,
            ..Default::default()
        }
    }

    #[test]
    fn score_is_always_within_unit_interval() {
        let empty = protection_score(
            &WhoIsResult::failed("no whois data"),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );
        assert!((0.0..=1.0).contains(&empty));

        let adverse = protection_score(
            &WhoIsResult::default(),
            &DnsLookupResult {
                dns_records: (0..20)
                    .map(|_| crate::results::dnslookup::DnsRecord {
                        record_type: crate::results::dnslookup::DnsRecordType::A,
                        name: "example.com".to_string(),
                        ttl: 60,
                        value: serde_json::json!("1.2.3.4"),
                        priority: None,
                    })
                    .collect(),
                ..Default::default()
            },
            &HarvesterResult {
                emails: vec!["a@example.com".to_string(); 80],
                subdomains: vec!["x.example.com".to_string(); 150],
            },
            &nmap_with(
                (0..60)
                    .map(|i| {
                        open_port_with_vulns(i, vec![vuln(SeverityType::Critical, 9.8); 5])
                    })
                    .collect(),
                97,
            ),
        );
        assert!((0.0..=1.0).contains(&adverse));
    }

    #[test]
    fn quiet_target_with_failed_whois_scores_perfectly() {
        // Nothing found anywhere and no whois data on record: no exposure
        // term contributes a deduction.
        let score = protection_score(
            &WhoIsResult::failed("no match for domain"),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn successful_whois_alone_costs_two_points() {
        let score = protection_score(
            &WhoIsResult::default(),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );
        // whois sub-score 20, weight 0.1 -> deduction 2 -> 0.98.
        assert!((score - 0.98).abs() < 1e-9);
    }

    #[test]
    fn saturated_adverse_input_floors_at_zero() {
        let vulns: Vec<Vulnerability> = vec![vuln(SeverityType::Critical, 9.9); 10];
        let score = protection_score(
            &WhoIsResult::default(),
            &DnsLookupResult {
                dns_records: vec![crate::results::dnslookup::DnsRecord {
                    record_type: crate::results::dnslookup::DnsRecordType::A,
                    name: "example.com".to_string(),
                    ttl: 60,
                    value: serde_json::json!("1.2.3.4"),
                    priority: None,
                }],
                ..Default::default()
            },
            &HarvesterResult {
                emails: vec!["a@example.com".to_string(); 60],
                subdomains: vec!["x.example.com".to_string(); 120],
            },
            &nmap_with(
                (0..55).map(|i| open_port_with_vulns(i, vulns.clone())).collect(),
                98,
            ),
        );
        // Deduction: 20 + 20 + 2 + 10 + 40 + 20 + 10 = 122, clamped to 0.
        assert_eq!(score, 0.0);
    }

    #[test]
    fn single_dns_record_saturates_the_dns_sub_score() {
        let one_record = DnsLookupResult {
            dns_records: vec![crate::results::dnslookup::DnsRecord {
                record_type: crate::results::dnslookup::DnsRecordType::A,
                name: "example.com".to_string(),
                ttl: 60,
                value: serde_json::json!("1.2.3.4"),
                priority: None,
            }],
            ..Default::default()
        };
        let score_one = protection_score(
            &WhoIsResult::failed("unavailable"),
            &one_record,
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );

        let mut many = one_record.clone();
        many.dns_records = vec![many.dns_records[0].clone(); 40];
        let score_many = protection_score(
            &WhoIsResult::failed("unavailable"),
            &many,
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );

        // dns sub-score saturates at one record: deduction 10 either way.
        assert!((score_one - 0.9).abs() < 1e-9);
        assert_eq!(score_one, score_many);
    }

    #[test]
    fn os_detection_adds_a_flat_penalty() {
        let without_os = protection_score(
            &WhoIsResult::failed("unavailable"),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &nmap_with(vec![], 0),
        );
        let with_os = protection_score(
            &WhoIsResult::failed("unavailable"),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &nmap_with(vec![], 95),
        );
        assert!((without_os - with_os - 0.1).abs() < 1e-9);
    }

    #[test]
    fn vulnerability_severities_are_weighted() {
        let mixed = nmap_with(
            vec![open_port_with_vulns(
                80,
                vec![
                    vuln(SeverityType::Low, 2.0),
                    vuln(SeverityType::Medium, 5.0),
                    vuln(SeverityType::High, 8.0),
                    vuln(SeverityType::Critical, 9.5),
                ],
            )],
            0,
        );
        let score = protection_score(
            &WhoIsResult::failed("unavailable"),
            &DnsLookupResult::default(),
            &HarvesterResult::default(),
            &mixed,
        );
        // Weighted vulns: 1 + 3 + 7 + 15 = 26 -> sub-score 52 -> 0.4 * 52 = 20.8.
        // One open port of cap 50 -> sub-score 2 -> 0.2 * 2 = 0.4.
        let expected = (100.0 - (20.8 + 0.4)) / 100.0;
        assert!((score - expected).abs() < 1e-9);
    }
}
