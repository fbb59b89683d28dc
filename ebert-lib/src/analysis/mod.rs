//! End-to-end assessment of one account.
//!
//! [`analyze`] runs the metrics aggregator, the scoring engine, and the flag
//! generator exactly once each and packages their output as an immutable
//! [`Analysis`]. It has no error paths and performs no I/O.

mod profile_analysis;

pub use profile_analysis::Analysis;

use crate::facts::{Event, Profile, Repository};
use crate::{flags, metrics, scoring};
use chrono::{DateTime, Utc};

const LOG_TARGET: &str = "  analysis";

/// Assess `profile` as of `now`.
#[must_use]
pub fn analyze(profile: Profile, repositories: &[Repository], events: &[Event], now: DateTime<Utc>) -> Analysis {
    let metrics = metrics::aggregate(&profile, repositories, events, now);
    let scores = scoring::score(&metrics, &profile);
    let overall_score = scores.overall();
    let risk_level = scoring::RiskLevel::from_score(overall_score);
    let flags = flags::generate(&profile, &metrics);

    log::debug!(target: LOG_TARGET, "Metrics for '{}': {metrics:?}", profile.login);
    log::debug!(target: LOG_TARGET, "Scores for '{}': {scores:?}, overall {overall_score:.1} ({risk_level})", profile.login);

    Analysis {
        user: profile,
        scores,
        overall_score,
        risk_level,
        metrics,
        red_flags: flags.red_flags,
        warnings: flags.warnings,
        positives: flags.positives,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::PUSH_EVENT;
    use crate::scoring::RiskLevel;
    use chrono::TimeDelta;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap().to_utc()
    }

    fn profile(age_days: i64) -> Profile {
        Profile {
            login: "someone".to_string(),
            created_at: now() - TimeDelta::days(age_days),
            updated_at: now(),
            ..Profile::default()
        }
    }

    fn repository(stars: i64, archived: bool, updated_days_ago: i64, language: &str) -> Repository {
        Repository {
            name: "repo".to_string(),
            stargazers_count: stars,
            forks_count: stars / 5,
            archived,
            updated_at: now() - TimeDelta::days(updated_days_ago),
            created_at: now() - TimeDelta::days(1000),
            language: language.to_string(),
            ..Repository::default()
        }
    }

    fn push(days_ago: i64, commit_count: i64) -> Event {
        Event {
            kind: PUSH_EVENT.to_string(),
            created_at: now() - TimeDelta::days(days_ago),
            commit_count,
        }
    }

    fn assert_bounded(value: f64) {
        assert!((0.0..=100.0).contains(&value), "score {value} out of bounds");
    }

    #[test]
    fn test_established_account_without_details() {
        let analysis = analyze(profile(400), &[], &[], now());

        assert!((analysis.scores.identity - 50.0).abs() < f64::EPSILON);
        assert!((analysis.scores.quality - 50.0).abs() < f64::EPSILON);
        assert!((analysis.scores.maintenance - 50.0).abs() < f64::EPSILON);
        assert!(analysis.positives.iter().any(|p| p.contains("Established account")));
        assert!(analysis.warnings.iter().any(|w| w.contains("No verifiable contact information")));
        assert_eq!(analysis.timestamp, now());
        assert_eq!(analysis.user.login, "someone");
    }

    #[test]
    fn test_tier_matches_overall_score() {
        let analysis = analyze(profile(10), &[], &[], now());
        assert_eq!(analysis.risk_level, RiskLevel::from_score(analysis.overall_score));
        assert!((analysis.overall_score - analysis.scores.overall()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_quiet_account_is_riskier_than_established_one() {
        let fresh = analyze(profile(5), &[repository(0, false, 100, "")], &[], now());

        let veteran = Profile {
            name: "Veteran".to_string(),
            company: "Acme".to_string(),
            email: "vet@example.com".to_string(),
            followers: 800,
            ..profile(3000)
        };
        let repositories: Vec<_> = (0..10).map(|i| repository(200, false, i, "Rust")).collect();
        let events = [push(1, 40), push(10, 40)];
        let established = analyze(veteran, &repositories, &events, now());

        assert!(fresh.overall_score > established.overall_score);
        assert_eq!(established.risk_level, RiskLevel::Low);
        assert!(!fresh.red_flags.is_empty());
    }

    #[test]
    fn test_scores_bounded_across_inputs() {
        for age in [-30, 0, 89, 90, 365, 366, 731, 10_000] {
            for followers in [-5, 0, 10, 51, 101, 501] {
                for repo_count in [0, 1, 6, 20] {
                    let p = Profile { followers, ..profile(age) };
                    let repositories: Vec<_> = (0..repo_count)
                        .map(|i| repository(i * 7 - 3, i % 3 == 0, i * 5, "Python"))
                        .collect();
                    let events = [push(1, repo_count * 3), push(200, 100)];

                    let analysis = analyze(p, &repositories, &events, now());
                    for (_, value) in analysis.scores.axes() {
                        assert_bounded(value);
                    }
                    assert_bounded(analysis.overall_score);
                    assert_eq!(analysis.risk_level, RiskLevel::from_score(analysis.overall_score));
                }
            }
        }
    }

    #[test]
    fn test_json_field_names() {
        let analysis = analyze(profile(400), &[], &[], now());
        let value = serde_json::to_value(&analysis).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "user",
            "scores",
            "overall_score",
            "risk_level",
            "metrics",
            "red_flags",
            "warnings",
            "positives",
            "timestamp",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 9);
        assert_eq!(value["risk_level"], "medium");
        assert_eq!(value["metrics"]["account_age_days"], 400);
    }
}
