// src/error.rs

use crate::enums::{ErrorCode, TargetType, ToolName};
use std::time::Duration;
use thiserror::Error;

/// Error taxonomy for the validation and boundary paths of the core.
///
/// Each failure mode stays distinguishable by variant so orchestrating code
/// can decide between "skip this tool", "abort this target", and "retry"
/// without matching on message strings. In particular
/// [`ScanError::ToolIncompatible`] is a skip signal, not a fault.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A URI or host string could not be parsed.
    #[error("parsing failed: {0}")]
    Parsing(String),

    /// A host failed classification or a domain-validity check.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The host type is recognized but the tool does not support it.
    #[error("tool '{tool}' is incompatible with host type '{host_type}': {reason}")]
    ToolIncompatible {
        tool: ToolName,
        host_type: TargetType,
        reason: String,
    },

    /// A network boundary call (DNS resolution) failed.
    #[error("communication failed: {0}")]
    Communication(String),

    /// A boundary call exceeded its time budget.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

impl ScanError {
    /// The wire-level error code corresponding to this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScanError::Parsing(_) => ErrorCode::Parsing,
            ScanError::Validation(_) => ErrorCode::Validation,
            ScanError::ToolIncompatible { .. } => ErrorCode::ToolSkipped,
            ScanError::Communication(_) => ErrorCode::Communication,
            ScanError::Timeout(_) => ErrorCode::Timeout,
        }
    }

    /// True when the error means "skip this tool for this target" rather than
    /// a hard validation failure.
    pub fn is_tool_skip(&self) -> bool {
        matches!(self, ScanError::ToolIncompatible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompatibility_is_a_skip_with_its_own_code() {
        let err = ScanError::ToolIncompatible {
            tool: ToolName::WhoIs,
            host_type: TargetType::Ip,
            reason: "type mismatch for tool operation".to_string(),
        };
        assert!(err.is_tool_skip());
        assert_eq!(err.code(), ErrorCode::ToolSkipped);
        let message = err.to_string();
        assert!(message.contains("WhoIs"));
        assert!(message.contains("IP"));
    }

    #[test]
    fn other_kinds_keep_their_codes() {
        assert_eq!(ScanError::Parsing("bad uri".into()).code(), ErrorCode::Parsing);
        assert_eq!(ScanError::Validation("bad host".into()).code(), ErrorCode::Validation);
        assert_eq!(ScanError::Communication("dns down".into()).code(), ErrorCode::Communication);
        assert_eq!(ScanError::Timeout(Duration::from_secs(5)).code(), ErrorCode::Timeout);
        assert!(!ScanError::Validation("bad host".into()).is_tool_skip());
    }
}
