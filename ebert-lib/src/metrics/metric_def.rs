use super::Metrics;

/// Display metadata for one counter of [`Metrics`].
#[derive(Debug)]
pub struct MetricDef {
    pub name: &'static str,
    pub description: &'static str,
    pub extractor: fn(&Metrics) -> i64,
}

macro_rules! metric_def {
    ($name:expr, $description:expr, $field:ident) => {
        MetricDef {
            name: $name,
            description: $description,
            extractor: |metrics| metrics.$field,
        }
    };
}

pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!("account_age_days", "Age of the account in days", account_age_days),
    metric_def!("repos", "Number of public repositories", repos),
    metric_def!("stars", "Stars across all repositories", stars),
    metric_def!("forks", "Forks across all repositories", forks),
    metric_def!("followers", "Number of followers", followers),
    metric_def!("recent_commits", "Commits pushed in the last 90 days", recent_commits),
    metric_def!("recently_updated", "Repositories updated in the last 30 days", recently_updated),
    metric_def!("archived", "Archived repositories", archived),
    metric_def!("npm_packages", "JavaScript or TypeScript repositories", npm_packages),
    metric_def!("python_packages", "Python repositories", python_packages),
];
