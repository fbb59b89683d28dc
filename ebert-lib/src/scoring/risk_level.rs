use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Aggregate score at or above which an account is high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 60.0;

/// Aggregate score at or above which an account is at least medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 30.0;

/// Discrete risk tier derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier for an aggregate score; lower bounds are inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
