// src/results/target.rs

use crate::enums::TargetType;
use serde::{Deserialize, Serialize};

/// A scan target as submitted by a user.
///
/// The `target_type` is caller-asserted and only advisory: the host
/// classifier re-derives the type from `value` before any tool dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// User-friendly name for the target.
    pub alias: String,

    /// The actual IP address or domain name of the target.
    pub value: String,

    /// Whether the target is an IP, a domain, or a subdomain.
    #[serde(rename = "type")]
    pub target_type: TargetType,
}
