use crate::facts::Profile;
use crate::metrics::Metrics;
use crate::scoring::{RiskLevel, RiskScores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete assessment of one account. Its serialized form is the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub user: Profile,
    pub scores: RiskScores,
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub metrics: Metrics,
    pub red_flags: Vec<String>,
    pub warnings: Vec<String>,
    pub positives: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
