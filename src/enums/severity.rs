// src/enums/severity.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Severity buckets derived from CVSS base scores.
///
/// The ordering is meaningful: `None < Low < Medium < High < Critical`, so the
/// derived `Ord` can be used directly when keeping the maximum severity seen.
/// `Unknown` sorts last but is never produced by [`SeverityType::from_cvss`];
/// it only appears when a vulnerability arrives without a usable severity.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum SeverityType {
    None,
    Low,
    Medium,
    High,
    Critical,
    #[default]
    Unknown,
}

impl SeverityType {
    /// Buckets a CVSS base score using half-open thresholds:
    /// `0` is `None`, `(0, 4)` is `Low`, `[4, 7)` is `Medium`, `[7, 9)` is
    /// `High`, and `9` upward is `Critical`.
    ///
    /// Negative scores fall into `Low` under the `< 4` arm. That is inherited
    /// behavior the platform depends on; scanners emit scores in `0.0..=10.0`,
    /// so rejecting here would complicate the infallible scoring path for an
    /// input that does not occur in practice.
    pub fn from_cvss(score: f64) -> Self {
        const LOW_MAX: f64 = 4.0;
        const MEDIUM_MAX: f64 = 7.0;
        const HIGH_MAX: f64 = 9.0;

        match score {
            s if s == 0.0 => SeverityType::None,
            s if s < LOW_MAX => SeverityType::Low,
            s if s < MEDIUM_MAX => SeverityType::Medium,
            s if s < HIGH_MAX => SeverityType::High,
            _ => SeverityType::Critical,
        }
    }

    /// Numeric rank for sorting and persistence: `None` is 0, `Critical` is 4.
    pub fn rank(self) -> u8 {
        match self {
            SeverityType::None => 0,
            SeverityType::Low => 1,
            SeverityType::Medium => 2,
            SeverityType::High => 3,
            SeverityType::Critical => 4,
            SeverityType::Unknown => 0,
        }
    }
}
