// src/enums/status.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle states of a scan as tracked by the orchestrator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ScanStatus {
    Pending,
    /// The scan is currently running.
    InProgress,
    /// The scan completed successfully.
    Completed,
    /// The scan failed due to an error.
    Failed,
    /// The scan was cancelled before completion.
    Cancelled,
    /// The scan is scheduled to run in the future.
    Scheduled,
}
