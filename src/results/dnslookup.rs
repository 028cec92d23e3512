// src/results/dnslookup.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DNS record types the lookup service reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum DnsRecordType {
    A,
    #[serde(rename = "AAAA")]
    #[strum(serialize = "AAAA")]
    Aaaa,
    #[serde(rename = "CNAME")]
    #[strum(serialize = "CNAME")]
    Cname,
    #[serde(rename = "TXT")]
    #[strum(serialize = "TXT")]
    Txt,
    #[serde(rename = "NS")]
    #[strum(serialize = "NS")]
    Ns,
    #[serde(rename = "MX")]
    #[strum(serialize = "MX")]
    Mx,
    #[serde(rename = "SOA")]
    #[strum(serialize = "SOA")]
    Soa,
    #[serde(rename = "DNSKey")]
    #[strum(serialize = "DNSKey")]
    DnsKey,
}

/// One DNS record. `value` is record-specific: a plain string for A/AAAA/TXT,
/// a [`MailExchange`] object for MX, and so on, so it stays a JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,

    /// The queried name.
    pub name: String,

    /// Time-to-live in seconds.
    pub ttl: u32,

    pub value: serde_json::Value,

    /// Preference for MX records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// An MX (mail exchange) record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailExchange {
    pub host: String,
    pub priority: i32,
}

/// An SOA (start of authority) record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartOfAuthority {
    pub primary_ns: String,
    pub admin_email: String,
    pub serial: i64,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum_ttl: i32,
}

/// A DNSKEY record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsKey {
    pub flags: i32,
    pub protocol: i32,
    pub algorithm: i32,
}

/// Result of a DNS lookup against a single domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsLookupResult {
    /// The domain that was queried.
    pub domain: String,

    pub dns_records: Vec<DnsRecord>,

    pub dnssec_enabled: bool,

    /// Time taken to perform the lookup, in milliseconds.
    pub lookup_duration_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl DnsLookupResult {
    pub fn record_count(&self) -> usize {
        self.dns_records.len()
    }
}
