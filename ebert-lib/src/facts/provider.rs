use super::client::{ApiResult, Client};
use super::{Event, Login, Profile, Progress, Repository};
use crate::Result;
use chrono::{DateTime, Local, Utc};
use core::time::Duration;
use futures::future::join3;
use ohno::{IntoAppError, app_err};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "    github";

/// Knobs controlling how the provider talks to the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Base URL of the REST API (e.g. `https://api.github.com`)
    pub api_url: String,

    /// Items requested per page
    pub page_size: u8,

    /// Maximum number of repository pages to fetch
    pub max_repo_pages: u32,

    /// Maximum number of event pages to fetch
    pub max_event_pages: u32,

    /// Timeout applied to each individual request
    pub request_timeout: Duration,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            page_size: 100,
            max_repo_pages: 50,
            max_event_pages: 3,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Everything fetched for one account, fully materialized.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub events: Vec<Event>,
}

/// Items gathered from a paginated listing.
#[derive(Debug)]
struct Listing<T> {
    items: Vec<T>,

    /// The page cap was reached while pages were still full
    truncated: bool,
}

/// Fetches profile, repository, and event data from GitHub.
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
    options: ProviderOptions,
}

impl Provider {
    pub fn new(token: Option<&str>, options: ProviderOptions, now: DateTime<Utc>) -> Result<Self> {
        if options.page_size == 0 {
            return Err(app_err!("page size must be at least 1"));
        }

        if options.max_repo_pages == 0 || options.max_event_pages == 0 {
            return Err(app_err!("page caps must be at least 1"));
        }

        let client = Client::new(token, options.api_url.as_str(), options.request_timeout, now)?;
        Ok(Self { client, options })
    }

    /// Fetch everything needed to analyze `login`.
    ///
    /// The three listings are retrieved concurrently; any failure fails the whole fetch
    /// so that callers never see partial data. A profile failure is reported in
    /// preference to listing failures, as it names the root cause (e.g. an unknown user).
    pub async fn fetch(&self, login: &Login, progress: &dyn Progress) -> Result<ProfileData> {
        progress.set_phase("Fetching");
        progress.set_message(&format!("profile, repositories, and events of '{login}'"));

        log::info!(target: LOG_TARGET, "Querying GitHub for information on account '{login}'");

        let (profile, repositories, events) = join3(self.get_profile(login), self.get_repositories(login), self.get_events(login)).await;
        progress.done();

        let profile = profile?;
        let repositories = repositories?;
        let events = events?;

        log::debug!(
            target: LOG_TARGET,
            "Fetched {} repositories and {} events for '{login}'",
            repositories.len(),
            events.len()
        );

        Ok(ProfileData {
            profile,
            repositories,
            events,
        })
    }

    pub async fn get_profile(&self, login: &Login) -> Result<Profile> {
        self.get_json(&self.user_url(login, ""), &format!("GitHub user '{login}'")).await
    }

    /// List every repository of `login`; fails when the last permitted page is still full.
    pub async fn get_repositories(&self, login: &Login) -> Result<Vec<Repository>> {
        let base = self.user_url(login, "/repos");
        let page_size = self.options.page_size;
        let max_pages = self.options.max_repo_pages;
        let listing = self
            .get_paged(&format!("repositories of '{login}'"), max_pages, |page| {
                format!("{base}?per_page={page_size}&sort=updated&page={page}")
            })
            .await?;

        if listing.truncated {
            return Err(app_err!(
                "repositories of '{login}' exceed the page cap ({max_pages} pages of {page_size}), raise max_repo_pages to analyze this account"
            ));
        }

        Ok(listing.items)
    }

    /// List the public events of `login`, keeping what was fetched when the page cap is reached.
    pub async fn get_events(&self, login: &Login) -> Result<Vec<Event>> {
        let base = self.user_url(login, "/events/public");
        let page_size = self.options.page_size;
        let max_pages = self.options.max_event_pages;
        let listing = self
            .get_paged(&format!("public events of '{login}'"), max_pages, |page| {
                format!("{base}?per_page={page_size}&page={page}")
            })
            .await?;

        if listing.truncated {
            log::warn!(
                target: LOG_TARGET,
                "Public events of '{login}' reached the page cap ({max_pages} pages), older events are ignored"
            );
        }

        Ok(listing.items)
    }

    /// Construct API URL for a user with optional path suffix
    fn user_url(&self, login: &Login, suffix: &str) -> String {
        format!("{}/users/{login}{suffix}", self.client.base_url())
    }

    /// Fetch pages until an empty or short page, or until `max_pages` pages have been read.
    async fn get_paged<T, F>(&self, what: &str, max_pages: u32, url_for_page: F) -> Result<Listing<T>>
    where
        T: DeserializeOwned,
        F: Fn(u32) -> String,
    {
        let page_size = usize::from(self.options.page_size);
        let mut items = Vec::new();

        for page in 1..=max_pages {
            let page_items: Vec<T> = self.get_json(&url_for_page(page), what).await?;
            let count = page_items.len();
            items.extend(page_items);

            if count < page_size {
                return Ok(Listing { items, truncated: false });
            }
        }

        log::debug!(
            target: LOG_TARGET,
            "Reached maximum page limit ({max_pages}) for {what}, stopping pagination after {} items",
            items.len()
        );

        Ok(Listing { items, truncated: true })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        match self.client.api_call(url).await {
            ApiResult::Success(resp, rate_limit) => {
                if let Some(rl) = rate_limit {
                    log::debug!(
                        target: LOG_TARGET,
                        "GitHub API rate limit: {} remaining, resets at {}",
                        rl.remaining,
                        rl.reset_at.with_timezone(&Local).format("%T")
                    );
                }
                resp.json::<T>().await.into_app_err_with(|| format!("parsing {what}"))
            }
            ApiResult::RateLimited(rl) => Err(app_err!(
                "GitHub API rate limit exceeded while fetching {what}, quota resets at {}",
                rl.reset_at.with_timezone(&Local).format("%T")
            )),
            ApiResult::NotFound => Err(app_err!("{what} not found")),
            ApiResult::Failed(e) => Err(app_err!("fetching {what} failed: {e:#}")),
        }
    }
}
