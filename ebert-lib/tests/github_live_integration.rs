//! Integration tests against the live GitHub API.
//!
//! Gated behind the `network_tests` feature:
//! ```sh
//! cargo test --features network_tests -p ebert-lib --test github_live_integration
//! ```
//!
//! Unauthenticated requests are limited to 60 per hour; set `GITHUB_TOKEN` to raise the quota.

#![cfg(feature = "network_tests")]

use chrono::Utc;
use ebert_lib::analysis::analyze;
use ebert_lib::facts::{Login, NoProgress, Provider, ProviderOptions};

fn provider() -> Provider {
    let token = std::env::var("GITHUB_TOKEN").ok();
    let options = ProviderOptions {
        max_repo_pages: 1,
        max_event_pages: 1,
        ..ProviderOptions::default()
    };
    Provider::new(token.as_deref(), options, Utc::now()).expect("valid provider options")
}

#[tokio::test]
async fn test_live_octocat_analysis() {
    let login: Login = "octocat".parse().expect("valid login");
    let data = provider().fetch(&login, &NoProgress).await.expect("fetch octocat");

    assert_eq!(data.profile.login, "octocat");
    assert!(!data.repositories.is_empty());

    let analysis = analyze(data.profile, &data.repositories, &data.events, Utc::now());
    assert!(analysis.metrics.account_age_days > 365);
    assert!(analysis.positives.iter().any(|p| p.starts_with("Established account")));
    assert!((0.0..=100.0).contains(&analysis.overall_score));
}

#[tokio::test]
async fn test_live_unknown_user() {
    let login: Login = "this-user-should-not-exist-ebert-0".parse().expect("valid login");
    let err = provider().fetch(&login, &NoProgress).await.expect_err("unknown user");
    assert!(format!("{err}").contains("not found"));
}
