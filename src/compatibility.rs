// src/compatibility.rs

//! The tool/host-type compatibility matrix and the host validation pipeline
//! built on top of it.
//!
//! The matrix is the permissive variant: WhoIs and DNSLookup accept
//! subdomains, because [`validate_host_for_tool`] reduces a subdomain to its
//! registrable domain before the tool ever sees it. The two rules compose;
//! a strict matrix would make that reduction unreachable.

use crate::enums::{ErrorCode, TargetType, ToolName};
use crate::error::ScanError;
use crate::validation::host::{classify_host_value, HostClassification};
use std::str::FromStr;
use tracing::debug;

/// Decides whether a tool can run against a classified host.
///
/// A single default implementation exists; the trait is the seam for
/// platforms that need an alternate matrix (for example, a tenant policy
/// that forbids subdomain harvesting).
pub trait ToolCompatibilityChecker {
    fn can_run_tool(&self, tool: ToolName, classification: &HostClassification) -> bool;

    /// String-level variant for tools named in configuration. An unknown tool
    /// name is always incompatible; there is no default-allow.
    fn can_run_named_tool(&self, tool_name: &str, classification: &HostClassification) -> bool {
        ToolName::from_str(tool_name)
            .map(|tool| self.can_run_tool(tool, classification))
            .unwrap_or(false)
    }
}

/// The standard compatibility matrix:
///
/// | Tool      | IP  | Domain | Subdomain |
/// |-----------|-----|--------|-----------|
/// | WhoIs     | no  | yes    | yes       |
/// | DNSLookup | no  | yes    | yes       |
/// | Harvester | no  | yes    | yes       |
/// | Nmap      | yes | yes    | yes       |
/// | WebScan   | no  | yes    | yes       |
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolCompatibilityChecker;

impl ToolCompatibilityChecker for DefaultToolCompatibilityChecker {
    fn can_run_tool(&self, tool: ToolName, classification: &HostClassification) -> bool {
        match tool {
            ToolName::WhoIs | ToolName::DNSLookup | ToolName::Harvester | ToolName::WebScan => {
                matches!(classification.target_type, TargetType::Domain | TargetType::Subdomain)
            }
            ToolName::Nmap => matches!(
                classification.target_type,
                TargetType::Ip | TargetType::Domain | TargetType::Subdomain
            ),
        }
    }
}

/// True for tools that operate on a registrable domain rather than the raw
/// target value.
fn is_domain_oriented(tool: ToolName) -> bool {
    matches!(tool, ToolName::WhoIs | ToolName::DNSLookup | ToolName::Harvester)
}

/// Validates a host value for a specific tool and returns the string the tool
/// should be invoked with.
///
/// The pipeline is classify, gate on the compatibility matrix, then extract
/// the base domain for the domain-oriented tools. Every failure mode keeps
/// its own [`ScanError`] variant; an incompatible pairing in particular comes
/// back as [`ScanError::ToolIncompatible`], which callers treat as "skip this
/// tool", not as a failed target.
pub fn validate_host_for_tool(value: &str, tool: ToolName) -> Result<String, ScanError> {
    let classification = classify_host_value(value)?;

    let checker = DefaultToolCompatibilityChecker;
    if !checker.can_run_tool(tool, &classification) {
        debug!(
            %tool,
            host_type = %classification.target_type,
            value,
            "tool incompatible with host type, skipping"
        );
        return Err(ScanError::ToolIncompatible {
            tool,
            host_type: classification.target_type,
            reason: "type mismatch for tool operation".to_string(),
        });
    }

    if is_domain_oriented(tool) {
        return classification.base_domain();
    }

    Ok(value.to_string())
}

/// Rolls a validation-pipeline error up to the wire code the orchestrator
/// records on the tool result: skipped tools keep their dedicated code, every
/// other failure is a validation error for this target/tool pair.
pub fn classify_validation_error_code(err: &ScanError) -> ErrorCode {
    if err.is_tool_skip() {
        ErrorCode::ToolSkipped
    } else {
        ErrorCode::Validation
    }
}
