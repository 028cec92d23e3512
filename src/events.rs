// src/events.rs

//! Event envelopes published on the message bus. Every event embeds a
//! [`BaseEvent`] carrying the scan identity and a UTC timestamp stamped at
//! construction time, so consumers can order and correlate events without
//! inspecting the payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScanError;
use crate::results::target::Target;
use crate::results::tools::ToolResult;

/// Common fields shared by every event on the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEvent {
    /// Unique identifier of the scan this event belongs to.
    pub scan_id: Uuid,
    /// UTC timestamp stamped when the event was built.
    pub timestamp: DateTime<Utc>,
}

impl BaseEvent {
    fn now(scan_id: Uuid) -> Self {
        Self {
            scan_id,
            timestamp: Utc::now(),
        }
    }
}

/// Signals that a scan has begun for a specific target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanStartedEvent {
    #[serde(flatten)]
    pub base: BaseEvent,
    /// The domain or IP being scanned.
    pub target: Target,
}

impl ScanStartedEvent {
    pub fn new(scan_id: Uuid, target: Target) -> Self {
        Self {
            base: BaseEvent::now(scan_id),
            target,
        }
    }
}

/// Signals that a scan has been cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanCancelledEvent {
    #[serde(flatten)]
    pub base: BaseEvent,
}

impl ScanCancelledEvent {
    pub fn new(scan_id: Uuid) -> Self {
        Self {
            base: BaseEvent::now(scan_id),
        }
    }
}

/// Signals that a scan has failed and cannot go on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFailedEvent {
    #[serde(flatten)]
    pub base: BaseEvent,
    pub reason: String,
}

impl ScanFailedEvent {
    pub fn new(scan_id: Uuid, reason: impl Into<String>) -> Self {
        Self {
            base: BaseEvent::now(scan_id),
            reason: reason.into(),
        }
    }
}

/// Carries one tool's output for a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultEvent {
    #[serde(flatten)]
    pub base: BaseEvent,
    pub tool_result: ToolResult,
}

impl ToolResultEvent {
    pub fn new(scan_id: Uuid, tool_result: ToolResult) -> Self {
        Self {
            base: BaseEvent::now(scan_id),
            tool_result,
        }
    }
}

/// Turns tool results into the byte payloads the bus actually transports.
#[derive(Debug, Default)]
pub struct ToolEventFactory;

impl ToolEventFactory {
    /// Wraps a tool result in a [`ToolResultEvent`] and serializes it for
    /// publishing.
    pub fn build_event(
        &self,
        scan_id: Uuid,
        tool_result: ToolResult,
    ) -> Result<Vec<u8>, ScanError> {
        let event = ToolResultEvent::new(scan_id, tool_result);
        serde_json::to_vec(&event).map_err(|e| ScanError::Parsing(e.to_string()))
    }
}
