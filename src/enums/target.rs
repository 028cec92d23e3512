// src/enums/target.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kind of host a scan target denotes.
///
/// Callers may assert a type when submitting a target, but the host classifier
/// re-derives it from the value itself before any tool is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum TargetType {
    /// A literal IPv4 address.
    #[serde(rename = "IP")]
    #[strum(serialize = "IP")]
    Ip,

    /// A registrable (top-level) domain such as `example.com`.
    Domain,

    /// A host with labels below the registrable domain, such as `www.example.com`.
    Subdomain,
}
