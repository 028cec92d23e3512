// src/results/whois.rs

use serde::{Deserialize, Serialize};

/// Registration data for a domain as parsed from a WHOIS response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoIsData {
    pub domain: DomainRecord,
    pub registrar: ContactRecord,
    pub registrant: ContactRecord,
}

/// The domain section of a WHOIS response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRecord {
    pub id: String,
    pub domain: String,
    pub name: String,
    pub extension: String,
    pub whois_server: String,
    pub status: Vec<String>,
    pub name_servers: Vec<String>,
    pub dnssec: bool,
    pub created_date: String,
    pub updated_date: String,
    pub expiration_date: String,
}

/// A registrar or registrant contact block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub name: String,
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
}

/// Result of a WHOIS lookup. A lookup is considered successful exactly when
/// `error` is empty; the raw data may still be sparse for privacy-shielded
/// registrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoIsResult {
    pub raw_data: Option<WhoIsData>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl WhoIsResult {
    pub fn is_successful(&self) -> bool {
        self.error.is_empty()
    }

    pub fn failed(error: impl Into<String>) -> Self {
        WhoIsResult {
            raw_data: None,
            error: error.into(),
        }
    }
}
