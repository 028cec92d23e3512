// src/results/nmap.rs

//! Port/OS/vulnerability scan results and the aggregation helpers the
//! protection score is built on.

use crate::enums::{OwaspCategory, SeverityType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Result of a port/OS/vulnerability scan against one host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NmapResult {
    pub host_name: String,
    pub host_address: String,
    pub scanned_ports: Vec<PortData>,
    pub most_likely_os: OsData,
}

/// One scanned port and the findings attached to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortData {
    pub id: u16,
    pub protocol: String,
    pub service: Service,
    pub product: String,
    /// Port state as reported by the scanner, e.g. "open" or "filtered".
    pub state: String,
    pub vulnerabilities: Vec<Vulnerability>,
}

impl PortData {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

/// The service detected behind a port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    pub version: String,
    pub confidence: i32,
    pub cpe: String,
}

/// The most likely operating system fingerprint for the host.
/// `accuracy` is the scanner's confidence as a 0–100 percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsData {
    pub name: String,
    pub accuracy: i32,
    pub family: String,
    #[serde(rename = "type")]
    pub os_type: String,
    pub fingerprint: String,
    pub cpe: String,
    pub vulnerabilities: Vec<Vulnerability>,
}

/// How exploitable a vulnerability is, as scored by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exploit {
    #[serde(rename = "exploit_score")]
    pub score: f64,
    pub exploitability: String,
}

/// A single vulnerability finding.
///
/// Only the fields the core logic relies on are typed strictly; the rest are
/// auxiliary context carried along for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub id: Uuid,
    pub host_id: Uuid,
    pub scan_id: Uuid,
    pub cve_id: String,

    /// The weakness category this vulnerability rolls up under.
    #[serde(rename = "type")]
    pub category: OwaspCategory,

    /// CVSS base score in `0.0..=10.0`.
    #[serde(rename = "cvss")]
    pub base_cvss_score: f64,

    #[serde(rename = "reference")]
    pub references: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub risk_score: f64,

    pub exploit: Exploit,

    /// Severity as already classified by the producing service.
    pub base_severity: SeverityType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Vulnerability tallies per severity bucket. Always sums to the number of
/// vulnerabilities counted; each vulnerability lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub none: u32,
    pub unknown: u32,
}

impl SeverityCounts {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.none + self.unknown
    }
}

/// Tallies vulnerabilities by their already-assigned `base_severity`. The
/// severity is taken as recorded, not re-derived from CVSS; anything absent
/// lands in the `unknown` bucket.
pub fn severity_counts(vulnerabilities: &[Vulnerability]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();

    for vulnerability in vulnerabilities {
        match vulnerability.base_severity {
            SeverityType::None => counts.none += 1,
            SeverityType::Low => counts.low += 1,
            SeverityType::Medium => counts.medium += 1,
            SeverityType::High => counts.high += 1,
            SeverityType::Critical => counts.critical += 1,
            SeverityType::Unknown => counts.unknown += 1,
        }
    }

    counts
}

impl NmapResult {
    /// Flattens vulnerabilities from every scanned port into one sequence,
    /// order-preserving, duplicates retained.
    pub fn all_vulnerabilities(&self) -> Vec<Vulnerability> {
        self.scanned_ports
            .iter()
            .flat_map(|port| port.vulnerabilities.iter().cloned())
            .collect()
    }

    pub fn total_vulnerabilities(&self) -> usize {
        self.scanned_ports.iter().map(|port| port.vulnerabilities.len()).sum()
    }

    /// The subset of scanned ports reported as open.
    pub fn open_ports(&self) -> Vec<&PortData> {
        self.scanned_ports.iter().filter(|port| port.is_open()).collect()
    }

    /// The maximum severity observed per weakness category, with each
    /// vulnerability's severity re-derived from its CVSS base score.
    pub fn severity_per_category(&self) -> HashMap<OwaspCategory, SeverityType> {
        let mut severity_map: HashMap<OwaspCategory, SeverityType> = HashMap::new();

        for port in &self.scanned_ports {
            for vulnerability in &port.vulnerabilities {
                let severity = SeverityType::from_cvss(vulnerability.base_cvss_score);
                severity_map
                    .entry(vulnerability.category)
                    .and_modify(|current| {
                        if severity > *current {
                            *current = severity;
                        }
                    })
                    .or_insert(severity);
            }
        }

        severity_map
    }

    /// Concise one-line summary for log output.
    pub fn ports_summary(&self) -> String {
        let counts = severity_counts(&self.all_vulnerabilities());
        format!(
            "Host {} ({}), Ports: {}, Vulnerabilities (Critical: {}, High: {}, Medium: {}, Low: {}), OS: {}",
            self.host_name,
            self.host_address,
            self.scanned_ports.len(),
            counts.critical,
            counts.high,
            counts.medium,
            counts.low,
            if self.most_likely_os.name.is_empty() { "unknown" } else { &self.most_likely_os.name },
        )
    }
}
