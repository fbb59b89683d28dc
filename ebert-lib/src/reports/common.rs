//! Common utilities shared across report generators.

use crate::scoring::RiskLevel;

/// Format a risk level as a consistent string.
pub const fn format_risk_status(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "LOW RISK",
        RiskLevel::Medium => "MEDIUM RISK",
        RiskLevel::High => "HIGH RISK",
    }
}

/// Format a score with one decimal place.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}
