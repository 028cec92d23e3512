// src/enums/web.rs

// Auxiliary enumerations for web-scan alert payloads. The numeric wire forms
// mirror the scanner's own alert export format.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// HTTP method an alert instance was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum MethodType {
    #[serde(rename = "GET")]
    #[strum(serialize = "GET")]
    Get,
    #[serde(rename = "POST")]
    #[strum(serialize = "POST")]
    Post,
    #[serde(rename = "PUT")]
    #[strum(serialize = "PUT")]
    Put,
    #[serde(rename = "PATCH")]
    #[strum(serialize = "PATCH")]
    Patch,
    #[serde(rename = "DELETE")]
    #[strum(serialize = "DELETE")]
    Delete,
}

/// Risk code reported by the web scanner, `"0"` (informational) to `"3"` (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCode {
    #[serde(rename = "0")]
    Informational,
    #[serde(rename = "1")]
    Low,
    #[serde(rename = "2")]
    Medium,
    #[serde(rename = "3")]
    High,
}

/// How confident the web scanner is in an alert, `"0"` (false positive) to `"3"` (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WebConfidence {
    #[serde(rename = "0")]
    FalsePositive,
    #[serde(rename = "1")]
    Low,
    #[serde(rename = "2")]
    Medium,
    #[serde(rename = "3")]
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_codes_use_numeric_strings() {
        assert_eq!(serde_json::to_string(&RiskCode::High).unwrap(), "\"3\"");
        assert_eq!(serde_json::from_str::<RiskCode>("\"0\"").unwrap(), RiskCode::Informational);
        assert!(RiskCode::High > RiskCode::Low);
    }
}
