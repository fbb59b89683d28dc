//! Heuristic risk scoring
//!
//! This module turns a [`Metrics`] bundle (plus a handful of raw profile fields)
//! into five bounded sub-scores, their mean, and a discrete [`RiskLevel`].
//!
//! # Implementation Model
//!
//! Every axis starts from a neutral baseline of 50 and applies additive
//! adjustments drawn from ordered band ladders. Within a ladder the first band
//! whose predicate holds wins; separate ladders stack. The sum is clamped to
//! `[0, 100]`. Ratios over the repository count short-circuit to the baseline
//! when there are no repositories.
//!
//! Scoring is a pure function: the same inputs always produce bit-identical
//! results.

mod axes;
mod band;
mod risk_level;
mod risk_scores;

pub(crate) use band::ratio;
pub use risk_level::RiskLevel;
pub use risk_scores::RiskScores;

use crate::facts::Profile;
use crate::metrics::Metrics;

/// Compute all five axis scores.
#[must_use]
pub fn score(metrics: &Metrics, profile: &Profile) -> RiskScores {
    RiskScores {
        identity: axes::identity(metrics, profile),
        activity: axes::activity(metrics),
        quality: axes::quality(metrics),
        maintenance: axes::maintenance(metrics),
        community: axes::community(metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::band::BASELINE;
    use super::*;

    #[test]
    fn test_score_is_deterministic() {
        let metrics = Metrics {
            account_age_days: 1234,
            repos: 17,
            stars: 321,
            forks: 45,
            followers: 77,
            recent_commits: 40,
            recently_updated: 6,
            archived: 2,
            npm_packages: 3,
            python_packages: 1,
        };
        let profile = Profile {
            login: "someone".to_string(),
            blog: "https://example.com".to_string(),
            ..Profile::default()
        };

        let first = score(&metrics, &profile);
        let second = score(&metrics, &profile);
        for ((_, a), (_, b)) in first.axes().iter().zip(second.axes().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_zero_repositories_neutral_quality_and_maintenance() {
        let metrics = Metrics {
            account_age_days: 3,
            followers: 2000,
            stars: 9999,
            ..Metrics::default()
        };
        let scores = score(&metrics, &Profile::default());
        assert!((scores.quality - BASELINE).abs() < f64::EPSILON);
        assert!((scores.maintenance - BASELINE).abs() < f64::EPSILON);
    }
}
