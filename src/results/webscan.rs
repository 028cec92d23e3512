// src/results/webscan.rs

use crate::enums::web::{MethodType, RiskCode, WebConfidence};
use serde::{Deserialize, Serialize};

/// One concrete occurrence of a web vulnerability: where it was observed and
/// with what request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceAlert {
    pub id: String,
    pub uri: String,
    pub method: MethodType,
    #[serde(default)]
    pub param: String,
    #[serde(default)]
    pub attack: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub other_info: String,
}

/// A vulnerability class reported by the web scanner, with its instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebVulnerability {
    pub name: String,
    pub risk: RiskCode,
    #[serde(default)]
    pub instances: Vec<InstanceAlert>,
    pub confidence: WebConfidence,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub cwe_id: String,
    #[serde(default)]
    pub wasc_id: String,
}

/// Result of a web application scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebScanResult {
    #[serde(rename = "type")]
    pub scan_type: String,

    #[serde(rename = "result")]
    pub web_vulnerabilities: Vec<WebVulnerability>,
}
