use serde::{Deserialize, Serialize};

/// Aggregate counters derived from one account's activity records.
///
/// Computed once per analysis and never mutated afterwards. Counters are signed so
/// that nonsensical upstream values (negative star counts, future timestamps)
/// propagate through the arithmetic instead of being silently clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Whole days between account creation and the time of analysis
    pub account_age_days: i64,

    /// Number of repositories
    pub repos: i64,

    /// Stars summed over all repositories
    pub stars: i64,

    /// Forks summed over all repositories
    pub forks: i64,

    pub followers: i64,

    /// Commits carried by push events in the last 90 days
    pub recent_commits: i64,

    /// Repositories updated in the last 30 days
    pub recently_updated: i64,

    pub archived: i64,

    /// Repositories whose primary language is JavaScript or TypeScript
    pub npm_packages: i64,

    /// Repositories whose primary language is Python
    pub python_packages: i64,
}
