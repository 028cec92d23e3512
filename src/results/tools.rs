// src/results/tools.rs

//! The per-tool result envelope and its tag-dispatched wire format.
//!
//! The `result` payload's concrete shape is fully determined by the
//! `tool_name` tag, so deserialization branches on the tag and never guesses
//! from the payload's shape. An unrecognized tool name is a hard
//! deserialization failure.

use crate::enums::{ErrorCode, ToolName};
use crate::error::ScanError;
use crate::results::dnslookup::DnsLookupResult;
use crate::results::harvester::HarvesterResult;
use crate::results::nmap::NmapResult;
use crate::results::webscan::WebScanResult;
use crate::results::whois::WhoIsResult;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Structured error recorded on a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: ErrorCode,
    pub message: String,
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The payload of a tool result; exactly one variant per tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    WhoIs(WhoIsResult),
    Harvester(HarvesterResult),
    DnsLookup(DnsLookupResult),
    Nmap(NmapResult),
    WebScan(WebScanResult),
}

impl ToolOutput {
    /// The tool that produced this payload.
    pub fn tool_name(&self) -> ToolName {
        match self {
            ToolOutput::WhoIs(_) => ToolName::WhoIs,
            ToolOutput::Harvester(_) => ToolName::Harvester,
            ToolOutput::DnsLookup(_) => ToolName::DNSLookup,
            ToolOutput::Nmap(_) => ToolName::Nmap,
            ToolOutput::WebScan(_) => ToolName::WebScan,
        }
    }
}

/// The scan result for one tool against one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    #[serde(rename = "tool_name")]
    pub tool: ToolName,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ToolOutput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,

    pub timestamp: DateTime<Utc>,
}

impl ToolResult {
    pub fn new(result: ToolOutput) -> Self {
        ToolResult {
            tool: result.tool_name(),
            result: Some(result),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(tool: ToolName, error: ToolError) -> Self {
        ToolResult {
            tool,
            result: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Pretty JSON representation, mainly for operator-facing output.
    pub fn to_json(&self) -> Result<String, ScanError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::Parsing(format!("error marshalling ToolResult: {e}")))
    }
}

impl<'de> Deserialize<'de> for ToolResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawToolResult {
            tool_name: ToolName,
            #[serde(default)]
            result: Option<serde_json::Value>,
            #[serde(default)]
            error: Option<ToolError>,
            timestamp: DateTime<Utc>,
        }

        let raw = RawToolResult::deserialize(deserializer)?;

        // The tag picks the payload type; ToolName itself already rejects
        // unknown tool strings during deserialization above.
        let result = match raw.result {
            None => None,
            Some(value) => Some(match raw.tool_name {
                ToolName::WhoIs => ToolOutput::WhoIs(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                ToolName::Harvester => ToolOutput::Harvester(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                ToolName::DNSLookup => ToolOutput::DnsLookup(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                ToolName::Nmap => ToolOutput::Nmap(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                ToolName::WebScan => ToolOutput::WebScan(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
            }),
        };

        Ok(ToolResult {
            tool: raw.tool_name,
            result,
            error: raw.error,
            timestamp: raw.timestamp,
        })
    }
}
