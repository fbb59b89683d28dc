use serde::{Deserialize, Serialize};

/// Per-axis risk scores, each in `[0, 100]`. Higher means riskier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub identity: f64,
    pub activity: f64,
    pub quality: f64,
    pub maintenance: f64,
    pub community: f64,
}

impl RiskScores {
    /// Named view of the five axes, in display order.
    #[must_use]
    pub const fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("identity", self.identity),
            ("activity", self.activity),
            ("quality", self.quality),
            ("maintenance", self.maintenance),
            ("community", self.community),
        ]
    }

    /// Unweighted arithmetic mean of the five axes.
    #[must_use]
    pub fn overall(&self) -> f64 {
        (self.identity + self.activity + self.quality + self.maintenance + self.community) / 5.0
    }
}
