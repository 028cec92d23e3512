// src/enums/tools.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The scanning tools the platform orchestrates.
///
/// The enumeration is closed: every tool maps to exactly one compatibility
/// rule and exactly one event subject. Adding a tool without extending both
/// tables is a compile error, never a silent default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ToolName {
    WhoIs,
    Harvester,
    DNSLookup,
    Nmap,
    WebScan,
}

/// Message-bus subjects the platform publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum EventSubject {
    #[serde(rename = "event.scanstarted")]
    #[strum(serialize = "event.scanstarted")]
    ScanStarted,
    #[serde(rename = "event.scancancelled")]
    #[strum(serialize = "event.scancancelled")]
    ScanCancelled,
    #[serde(rename = "event.scanfailed")]
    #[strum(serialize = "event.scanfailed")]
    ScanFailed,
    #[serde(rename = "event.whois")]
    #[strum(serialize = "event.whois")]
    WhoIs,
    #[serde(rename = "event.dnslookup")]
    #[strum(serialize = "event.dnslookup")]
    DnsLookup,
    #[serde(rename = "event.harvester")]
    #[strum(serialize = "event.harvester")]
    Harvester,
    #[serde(rename = "event.nmap")]
    #[strum(serialize = "event.nmap")]
    Nmap,
    #[serde(rename = "event.webscan")]
    #[strum(serialize = "event.webscan")]
    WebScan,
}

impl ToolName {
    /// The subject a tool's results are published on. Total because the
    /// enumeration is closed; the exhaustive match keeps the 1:1 table honest.
    pub fn subject(self) -> EventSubject {
        match self {
            ToolName::WhoIs => EventSubject::WhoIs,
            ToolName::Harvester => EventSubject::Harvester,
            ToolName::DNSLookup => EventSubject::DnsLookup,
            ToolName::Nmap => EventSubject::Nmap,
            ToolName::WebScan => EventSubject::WebScan,
        }
    }
}

/// Resolves the subject for a tool named at the string level, e.g. from a
/// configuration file. An unknown name fails explicitly rather than mapping
/// to some fallback subject.
pub fn tool_subject_name(tool_name: &str) -> Result<String, crate::error::ScanError> {
    let tool = ToolName::from_str(tool_name)
        .map_err(|_| crate::error::ScanError::Validation(format!("invalid tool: {tool_name}")))?;
    Ok(tool.subject().to_string())
}

/// All known tools, in declaration order.
pub fn all_tools() -> Vec<ToolName> {
    ToolName::iter().collect()
}
