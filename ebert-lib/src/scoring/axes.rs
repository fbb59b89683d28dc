//! The five per-axis score functions.
//!
//! Each axis starts at [`BASELINE`], adds the adjustments of its band ladders
//! (first match within a ladder, ladders stack with each other), and clamps the
//! sum to `[0, 100]`. Higher means riskier.

use super::band::{BASELINE, Band, clamp_score, first_match, ratio};
use crate::facts::Profile;
use crate::metrics::Metrics;

/// Months covered by the recent commit window.
const COMMIT_WINDOW_MONTHS: f64 = 3.0;

const ACCOUNT_AGE_BANDS: &[Band<i64>] = &[
    Band::new(|age_days: i64| age_days > 730, -20.0),
    Band::new(|age_days: i64| age_days > 365, -10.0),
    Band::new(|age_days: i64| age_days < 90, 30.0),
];

const COMPANY_ADJUSTMENT: f64 = -10.0;
const EMAIL_ADJUSTMENT: f64 = -5.0;
const BLOG_ADJUSTMENT: f64 = -5.0;
const TWITTER_ADJUSTMENT: f64 = -5.0;
const MISSING_NAME_ADJUSTMENT: f64 = 10.0;

const COMMITS_PER_MONTH_BANDS: &[Band<f64>] = &[
    Band::new(|per_month: f64| per_month > 20.0, -20.0),
    Band::new(|per_month: f64| per_month > 10.0, -10.0),
    Band::new(|per_month: f64| per_month < 2.0, 20.0),
];

/// `(recently_updated, repos)`
const RECENCY_BANDS: &[Band<(i64, i64)>] = &[
    Band::new(|(updated, repos): (i64, i64)| repos >= 1 && updated == 0, 30.0),
    Band::new(|(updated, repos): (i64, i64)| repos >= 1 && ratio(updated, repos) > 0.3, -10.0),
];

const AVERAGE_STARS_BANDS: &[Band<f64>] = &[
    Band::new(|avg: f64| avg > 50.0, -20.0),
    Band::new(|avg: f64| avg > 10.0, -10.0),
    Band::new(|avg: f64| avg < 1.0, 10.0),
];

/// `(stars, forks)`
#[expect(clippy::cast_precision_loss, reason = "counters are far below 2^52")]
const FORK_BANDS: &[Band<(i64, i64)>] = &[Band::new(
    |(stars, forks): (i64, i64)| stars > 0 && forks as f64 > 0.1 * stars as f64,
    -10.0,
)];

const ARCHIVED_RATIO_BANDS: &[Band<f64>] = &[
    Band::new(|archived: f64| archived > 0.5, 30.0),
    Band::new(|archived: f64| archived > 0.3, 15.0),
];

/// `(recently_updated, repos)`
const ACTIVE_BANDS: &[Band<(i64, i64)>] = &[
    Band::new(|(updated, repos): (i64, i64)| ratio(updated, repos) > 0.5, -20.0),
    Band::new(|(updated, repos): (i64, i64)| ratio(updated, repos) > 0.3, -10.0),
    Band::new(|(updated, _repos): (i64, i64)| updated == 0, 20.0),
];

const FOLLOWER_BANDS: &[Band<i64>] = &[
    Band::new(|followers: i64| followers > 500, -25.0),
    Band::new(|followers: i64| followers > 100, -15.0),
    Band::new(|followers: i64| followers > 50, -10.0),
    Band::new(|followers: i64| followers < 10, 15.0),
];

/// `(stars, repos)`
const COMMUNITY_STAR_BANDS: &[Band<(i64, i64)>] = &[
    Band::new(|(stars, _repos): (i64, i64)| stars > 1000, -15.0),
    Band::new(|(stars, _repos): (i64, i64)| stars > 100, -10.0),
    Band::new(|(stars, repos): (i64, i64)| stars < 10 && repos > 5, 10.0),
];

/// Account age, disclosed affiliations, and display name.
#[must_use]
pub fn identity(metrics: &Metrics, profile: &Profile) -> f64 {
    let mut score = BASELINE + first_match(ACCOUNT_AGE_BANDS, metrics.account_age_days);

    if profile.has_company() {
        score += COMPANY_ADJUSTMENT;
    }
    if profile.has_email() {
        score += EMAIL_ADJUSTMENT;
    }
    if profile.has_blog() {
        score += BLOG_ADJUSTMENT;
    }
    if profile.has_twitter_username() {
        score += TWITTER_ADJUSTMENT;
    }
    if !profile.has_name() {
        score += MISSING_NAME_ADJUSTMENT;
    }

    clamp_score(score)
}

/// Commit cadence and share of recently updated repositories.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "counters are far below 2^52")]
pub fn activity(metrics: &Metrics) -> f64 {
    let commits_per_month = metrics.recent_commits as f64 / COMMIT_WINDOW_MONTHS;

    let score = BASELINE
        + first_match(COMMITS_PER_MONTH_BANDS, commits_per_month)
        + first_match(RECENCY_BANDS, (metrics.recently_updated, metrics.repos));

    clamp_score(score)
}

/// Stars per repository and fork uptake. Neutral without repositories.
#[must_use]
pub fn quality(metrics: &Metrics) -> f64 {
    if metrics.repos == 0 {
        return BASELINE;
    }

    let average_stars = ratio(metrics.stars, metrics.repos);

    let score = BASELINE + first_match(AVERAGE_STARS_BANDS, average_stars) + first_match(FORK_BANDS, (metrics.stars, metrics.forks));

    clamp_score(score)
}

/// Share of archived and of recently updated repositories. Neutral without repositories.
#[must_use]
pub fn maintenance(metrics: &Metrics) -> f64 {
    if metrics.repos == 0 {
        return BASELINE;
    }

    let archived_ratio = ratio(metrics.archived, metrics.repos);

    let score = BASELINE
        + first_match(ARCHIVED_RATIO_BANDS, archived_ratio)
        + first_match(ACTIVE_BANDS, (metrics.recently_updated, metrics.repos));

    clamp_score(score)
}

/// Followers and total stars.
#[must_use]
pub fn community(metrics: &Metrics) -> f64 {
    let score = BASELINE
        + first_match(FOLLOWER_BANDS, metrics.followers)
        + first_match(COMMUNITY_STAR_BANDS, (metrics.stars, metrics.repos));

    clamp_score(score)
}
