use super::Flags;
use crate::facts::Profile;
use crate::metrics::Metrics;
use crate::scoring::ratio;

const NEW_ACCOUNT_DAYS: i64 = 180;
const ESTABLISHED_ACCOUNT_DAYS: i64 = 365;
const LOW_FOLLOWERS: i64 = 10;
const HIGH_FOLLOWERS: i64 = 100;
const LOW_RECENT_COMMITS: i64 = 10;
const HIGH_RECENT_COMMITS: i64 = 50;
const HIGH_ARCHIVED_RATIO: f64 = 0.3;
const LOW_TOTAL_STARS: i64 = 10;
const MANY_REPOS: i64 = 5;

/// Evaluate every flag rule against raw profile fields and metrics.
///
/// Rules are independent of the axis scores and of each other; any number may fire.
/// Accounts between 180 and 365 days old get neither the new-account red flag nor
/// the established-account positive.
#[must_use]
pub fn generate(profile: &Profile, metrics: &Metrics) -> Flags {
    let mut flags = Flags::default();
    let age = metrics.account_age_days;

    if age < NEW_ACCOUNT_DAYS {
        flags.red_flag(format!("Very new account ({age} days old)"));
    } else if age > ESTABLISHED_ACCOUNT_DAYS {
        flags.positive(format!("Established account ({age} days old)"));
    }

    let followers = metrics.followers;
    if followers < LOW_FOLLOWERS {
        flags.warning(format!("Low follower count ({followers})"));
    } else if followers > HIGH_FOLLOWERS {
        flags.positive(format!("Strong community following ({followers} followers)"));
    }

    let commits = metrics.recent_commits;
    if commits < LOW_RECENT_COMMITS {
        flags.warning(format!("Low recent activity ({commits} commits in 90 days)"));
    } else if commits > HIGH_RECENT_COMMITS {
        flags.positive(format!("Active contributor ({commits} commits in 90 days)"));
    }

    if metrics.repos > 0 {
        let archived = ratio(metrics.archived, metrics.repos);
        if archived > HIGH_ARCHIVED_RATIO {
            flags.red_flag(format!("High percentage of archived repositories ({:.0}%)", archived * 100.0));
        }
    }

    if profile.has_contact_info() {
        if profile.has_company() {
            flags.positive(format!("Company affiliation: {}", profile.company));
        }
        if profile.has_blog() {
            flags.positive(format!("Has website/blog: {}", profile.blog));
        }
    } else {
        flags.warning("No verifiable contact information".to_string());
    }

    if metrics.recently_updated == 0 && metrics.repos > 0 {
        flags.red_flag("No repositories updated in last 30 days".to_string());
    }

    if metrics.stars < LOW_TOTAL_STARS && metrics.repos > MANY_REPOS {
        flags.warning(format!(
            "Many repositories ({}) but few stars ({})",
            metrics.repos, metrics.stars
        ));
    }

    flags
}
