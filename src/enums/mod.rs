// src/enums/mod.rs

// Closed enumerations shared across the platform. Every value here is part of
// the wire contract between services, so variants are never removed and the
// string forms are stable.

pub mod error_code;
pub mod owasp;
pub mod severity;
pub mod status;
pub mod target;
pub mod tools;
pub mod web;

pub use error_code::ErrorCode;
pub use owasp::OwaspCategory;
pub use severity::SeverityType;
pub use status::ScanStatus;
pub use target::TargetType;
pub use tools::{EventSubject, ToolName};
