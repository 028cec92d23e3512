// src/lib.rs

//! Shared core for the Vigil scanning platform: host classification and
//! validation, tool-compatibility gating, the wire-level result and event
//! shapes every service exchanges, and the scoring logic that rolls tool
//! findings up into a per-target protection score.

pub mod compatibility;
pub mod enums;
pub mod error;
pub mod events;
pub mod logging;
pub mod results;
pub mod validation;

pub use error::ScanError;
