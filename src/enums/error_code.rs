// src/enums/error_code.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Stable wire-level error codes attached to tool results and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ErrorCode {
    /// A service or dependency is unavailable or failed to respond.
    #[serde(rename = "SERVICE_ERROR")]
    #[strum(serialize = "SERVICE_ERROR")]
    Tool,

    /// Data could not be parsed or deserialized correctly.
    #[serde(rename = "PARSING_ERROR")]
    #[strum(serialize = "PARSING_ERROR")]
    Parsing,

    /// Input data failed validation checks.
    #[serde(rename = "VALIDATION_ERROR")]
    #[strum(serialize = "VALIDATION_ERROR")]
    Validation,

    /// Network communication or event handling failed.
    #[serde(rename = "COMMUNICATION_ERROR")]
    #[strum(serialize = "COMMUNICATION_ERROR")]
    Communication,

    /// An operation exceeded the time allowed for it.
    #[serde(rename = "TIMEOUT_ERROR")]
    #[strum(serialize = "TIMEOUT_ERROR")]
    Timeout,

    /// A tool was skipped because it does not apply to the target, which is
    /// informational for the orchestrator rather than a fault.
    #[serde(rename = "TOOL_SKIPPED_ERROR")]
    #[strum(serialize = "TOOL_SKIPPED_ERROR")]
    ToolSkipped,
}
