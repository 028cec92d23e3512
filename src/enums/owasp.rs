// src/enums/owasp.rs

//! OWASP Top 10 (2021) weakness taxonomy and the CWE roll-up table.
//!
//! The forward table below is the maintained artifact: each category lists the
//! CWE identifiers grouped under it. The reverse index used for lookups is
//! generated from it exactly once, the first time any lookup touches it, and
//! is immutable afterward, so concurrent readers never need synchronization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

/// Top-level weakness categories, plus two fallback members: `Other` for
/// recognized-but-unmapped weaknesses and `NoInfo` for identifiers that could
/// not be parsed at all.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum OwaspCategory {
    #[serde(rename = "Broken Access Control")]
    #[strum(serialize = "Broken Access Control")]
    BrokenAccessControl,
    #[serde(rename = "Cryptographic Failures")]
    #[strum(serialize = "Cryptographic Failures")]
    CryptographicFailures,
    Injection,
    #[serde(rename = "Insecure Design")]
    #[strum(serialize = "Insecure Design")]
    InsecureDesign,
    #[serde(rename = "Security Misconfiguration")]
    #[strum(serialize = "Security Misconfiguration")]
    SecurityMisconfiguration,
    #[serde(rename = "Vulnerable and Outdated Components")]
    #[strum(serialize = "Vulnerable and Outdated Components")]
    VulnerableAndOutdatedComponents,
    #[serde(rename = "Identification and Authentication Failures")]
    #[strum(serialize = "Identification and Authentication Failures")]
    IdentificationAndAuthenticationFailures,
    #[serde(rename = "Software and Data Integrity Failures")]
    #[strum(serialize = "Software and Data Integrity Failures")]
    SoftwareAndDataIntegrityFailures,
    #[serde(rename = "Security Logging and Monitoring Failures")]
    #[strum(serialize = "Security Logging and Monitoring Failures")]
    SecurityLoggingAndMonitoringFailures,
    #[serde(rename = "Server-Side Request Forgery (SSRF)")]
    #[strum(serialize = "Server-Side Request Forgery (SSRF)")]
    Ssrf,
    Other,
    #[default]
    #[serde(rename = "No Info")]
    #[strum(serialize = "No Info")]
    NoInfo,
}

/// Forward mapping for the 2021 OWASP CWE Top 10 groupings: each substantive
/// category and the CWE IDs rolled up under it.
static CATEGORY_CWES: &[(OwaspCategory, &[u16])] = &[
    (
        OwaspCategory::BrokenAccessControl,
        &[
            22, 23, 35, 59, 200, 201, 219, 264, 275, 276, 284, 285, 352, 359, 377, 402, 425, 441,
            497, 538, 540, 548, 552, 566, 601, 639, 651, 668, 706, 862, 863, 913, 922, 1275,
        ],
    ),
    (
        OwaspCategory::CryptographicFailures,
        &[
            261, 296, 310, 319, 321, 322, 323, 324, 325, 326, 327, 328, 329, 330, 331, 335, 336,
            337, 338, 340, 347, 523, 720, 757, 759, 760, 780, 818, 916,
        ],
    ),
    (
        OwaspCategory::Injection,
        &[
            20, 74, 75, 77, 78, 79, 80, 83, 87, 88, 89, 90, 91, 93, 94, 95, 96, 97, 98, 99, 113,
            116, 138, 184, 470, 471, 564, 610, 643, 644, 652, 917,
        ],
    ),
    (
        OwaspCategory::InsecureDesign,
        &[
            73, 183, 209, 213, 235, 256, 257, 266, 269, 280, 311, 312, 313, 316, 419, 430, 434,
            444, 451, 472, 501, 522, 525, 539, 579, 598, 602, 642, 646, 650, 653, 656, 657, 799,
            807, 840, 841, 927, 1021, 1173,
        ],
    ),
    (
        OwaspCategory::SecurityMisconfiguration,
        &[
            2, 11, 13, 15, 16, 260, 315, 520, 526, 537, 541, 547, 611, 614, 756, 776, 942, 1004,
            1032, 1174,
        ],
    ),
    (OwaspCategory::VulnerableAndOutdatedComponents, &[937, 1035, 1104]),
    (
        OwaspCategory::IdentificationAndAuthenticationFailures,
        &[
            255, 259, 287, 288, 290, 294, 295, 297, 300, 302, 304, 306, 307, 346, 384, 521, 613,
            620, 640, 798, 940, 1216,
        ],
    ),
    (
        OwaspCategory::SoftwareAndDataIntegrityFailures,
        &[345, 353, 426, 494, 502, 565, 784, 829, 830, 915],
    ),
    (OwaspCategory::SecurityLoggingAndMonitoringFailures, &[117, 223, 532, 778]),
    (OwaspCategory::Ssrf, &[918]),
];

/// Reverse index from CWE ID to category, generated from [`CATEGORY_CWES`].
/// A CWE ID appearing under two categories is a table maintenance error; it is
/// logged and the later entry wins, so the collision stays observable without
/// poisoning lookups.
static CWE_TO_CATEGORY: Lazy<HashMap<u16, OwaspCategory>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, cwe_ids) in CATEGORY_CWES {
        for &id in cwe_ids.iter() {
            if let Some(existing) = index.insert(id, *category) {
                warn!(
                    cwe_id = id,
                    existing_category = %existing,
                    new_category = %category,
                    "duplicate CWE ID in OWASP mapping table, later entry wins"
                );
            }
        }
    }
    index
});

impl OwaspCategory {
    /// Finds the OWASP Top 10 category for a CWE identifier string such as
    /// `"CWE-79"`, `"79"`, or the literal `"Other"` (case-insensitive, with or
    /// without the `CWE-` prefix).
    ///
    /// Numeric identifiers not present in the Top 10 groupings map to
    /// [`OwaspCategory::Other`]; inputs that are neither numeric nor `Other`
    /// map to [`OwaspCategory::NoInfo`].
    pub fn for_cwe(cwe_id: &str) -> OwaspCategory {
        let upper = cwe_id.trim().to_ascii_uppercase();
        let suffix = upper.strip_prefix("CWE-").unwrap_or(&upper);

        if suffix == "OTHER" {
            return OwaspCategory::Other;
        }

        match suffix.parse::<u16>() {
            Err(_) => OwaspCategory::NoInfo,
            Ok(id) => CWE_TO_CATEGORY.get(&id).copied().unwrap_or(OwaspCategory::Other),
        }
    }

    /// Parses a category from its wire string, returning `(NoInfo, false)`
    /// when the string names no known category.
    pub fn parse(s: &str) -> (OwaspCategory, bool) {
        match OwaspCategory::from_str(s) {
            Ok(category) => (category, true),
            Err(_) => (OwaspCategory::NoInfo, false),
        }
    }
}

/// Every category, fallbacks included, in display order.
pub static ALL_OWASP_CATEGORIES: &[OwaspCategory] = &[
    OwaspCategory::BrokenAccessControl,
    OwaspCategory::CryptographicFailures,
    OwaspCategory::Injection,
    OwaspCategory::InsecureDesign,
    OwaspCategory::SecurityMisconfiguration,
    OwaspCategory::VulnerableAndOutdatedComponents,
    OwaspCategory::IdentificationAndAuthenticationFailures,
    OwaspCategory::SoftwareAndDataIntegrityFailures,
    OwaspCategory::SecurityLoggingAndMonitoringFailures,
    OwaspCategory::Ssrf,
    OwaspCategory::Other,
    OwaspCategory::NoInfo,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cwes_map_to_their_category() {
        assert_eq!(OwaspCategory::for_cwe("CWE-79"), OwaspCategory::Injection);
        assert_eq!(OwaspCategory::for_cwe("79"), OwaspCategory::Injection);
        assert_eq!(OwaspCategory::for_cwe("cwe-918"), OwaspCategory::Ssrf);
        assert_eq!(OwaspCategory::for_cwe("CWE-287"), OwaspCategory::IdentificationAndAuthenticationFailures);
        assert_eq!(OwaspCategory::for_cwe("1275"), OwaspCategory::BrokenAccessControl);
    }

    #[test]
    fn unmapped_numeric_cwe_is_other() {
        // CWE-1 exists but is not part of the Top 10 groupings.
        assert_eq!(OwaspCategory::for_cwe("CWE-1"), OwaspCategory::Other);
        assert_eq!(OwaspCategory::for_cwe("9999"), OwaspCategory::Other);
    }

    #[test]
    fn other_literal_is_recognized_case_insensitively() {
        assert_eq!(OwaspCategory::for_cwe("Other"), OwaspCategory::Other);
        assert_eq!(OwaspCategory::for_cwe("OTHER"), OwaspCategory::Other);
        assert_eq!(OwaspCategory::for_cwe("CWE-other"), OwaspCategory::Other);
    }

    #[test]
    fn malformed_input_is_no_info() {
        assert_eq!(OwaspCategory::for_cwe(""), OwaspCategory::NoInfo);
        assert_eq!(OwaspCategory::for_cwe("CWE-"), OwaspCategory::NoInfo);
        assert_eq!(OwaspCategory::for_cwe("not-a-cwe"), OwaspCategory::NoInfo);
    }

    #[test]
    fn reverse_index_covers_every_forward_entry() {
        let total: usize = CATEGORY_CWES.iter().map(|(_, ids)| ids.len()).sum();
        // The forward table has no duplicates, so the index has one entry per ID.
        assert_eq!(CWE_TO_CATEGORY.len(), total);
    }

    #[test]
    fn wire_strings_survive_serde() {
        let json = serde_json::to_string(&OwaspCategory::Ssrf).unwrap();
        assert_eq!(json, "\"Server-Side Request Forgery (SSRF)\"");
        assert_eq!(serde_json::from_str::<OwaspCategory>(&json).unwrap(), OwaspCategory::Ssrf);

        let (category, ok) = OwaspCategory::parse("Broken Access Control");
        assert!(ok);
        assert_eq!(category, OwaspCategory::BrokenAccessControl);

        let (fallback, ok) = OwaspCategory::parse("Quantum Failures");
        assert!(!ok);
        assert_eq!(fallback, OwaspCategory::NoInfo);
    }
}
