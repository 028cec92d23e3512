// src/results/mod.rs

// Wire-level result shapes for every tool, plus the aggregation and scoring
// logic that rolls them up per target.

pub mod dnslookup;
pub mod harvester;
pub mod nmap;
pub mod protection_score;
pub mod target;
pub mod tools;
pub mod webscan;
pub mod whois;

pub use dnslookup::{DnsLookupResult, DnsRecord, DnsRecordType};
pub use harvester::HarvesterResult;
pub use nmap::{severity_counts, NmapResult, OsData, PortData, SeverityCounts, Vulnerability};
pub use protection_score::protection_score;
pub use target::Target;
pub use tools::{ToolError, ToolOutput, ToolResult};
pub use webscan::{InstanceAlert, WebScanResult, WebVulnerability};
pub use whois::WhoIsResult;
