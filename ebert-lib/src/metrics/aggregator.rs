use super::Metrics;
use crate::facts::{Event, Profile, Repository};
use chrono::{DateTime, TimeDelta, Utc};

/// Repositories updated within this many days count as recently updated.
const RECENT_UPDATE_WINDOW_DAYS: i64 = 30;

/// Push events within this many days contribute to the recent commit count.
const RECENT_COMMIT_WINDOW_DAYS: i64 = 90;

/// Language families tracked by [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageBucket {
    Npm,
    Python,
}

/// Exact, case-sensitive match on GitHub's language label.
fn classify_language(language: &str) -> Option<LanguageBucket> {
    match language {
        "JavaScript" | "TypeScript" => Some(LanguageBucket::Npm),
        "Python" => Some(LanguageBucket::Python),
        _ => None,
    }
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Reduce an account's records to a [`Metrics`] bundle as of `now`.
///
/// Pure function of its inputs. Empty listings produce zero counters, and
/// out-of-range upstream values are accumulated as-is.
#[must_use]
pub fn aggregate(profile: &Profile, repositories: &[Repository], events: &[Event], now: DateTime<Utc>) -> Metrics {
    let update_window = TimeDelta::days(RECENT_UPDATE_WINDOW_DAYS);
    let commit_window = TimeDelta::days(RECENT_COMMIT_WINDOW_DAYS);

    let mut metrics = Metrics {
        account_age_days: (now - profile.created_at).num_days(),
        repos: count(repositories.len()),
        followers: profile.followers,
        ..Metrics::default()
    };

    for repo in repositories {
        metrics.stars = metrics.stars.saturating_add(repo.stargazers_count);
        metrics.forks = metrics.forks.saturating_add(repo.forks_count);

        if repo.archived {
            metrics.archived += 1;
        }

        if now - repo.updated_at <= update_window {
            metrics.recently_updated += 1;
        }

        match classify_language(&repo.language) {
            Some(LanguageBucket::Npm) => metrics.npm_packages += 1,
            Some(LanguageBucket::Python) => metrics.python_packages += 1,
            None => {}
        }
    }

    metrics.recent_commits = events
        .iter()
        .filter(|event| event.is_push() && now - event.created_at <= commit_window)
        .fold(0i64, |total, event| total.saturating_add(event.commit_count));

    metrics
}
