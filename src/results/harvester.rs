// src/results/harvester.rs

use serde::{Deserialize, Serialize};

/// Result of an email/subdomain harvesting run against a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvesterResult {
    /// Harvested email addresses.
    pub emails: Vec<String>,

    /// Harvested subdomains.
    pub subdomains: Vec<String>,
}

impl HarvesterResult {
    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    pub fn subdomain_count(&self) -> usize {
        self.subdomains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let result: HarvesterResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.email_count(), 0);
        assert_eq!(result.subdomain_count(), 0);
    }
}
