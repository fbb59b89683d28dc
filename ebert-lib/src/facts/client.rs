//! GitHub API client
//!
//! Minimal GitHub REST client that issues GET requests and classifies the responses.

use chrono::{DateTime, Utc};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Result of a GitHub API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded - contains data and optional rate limit info
    Success(T, Option<RateLimitInfo>),

    /// Rate limited - the quota resets at the given time
    RateLimited(RateLimitInfo),

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed permanently
    Failed(ohno::AppError),
}

/// GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    now: DateTime<Utc>,
}

impl Client {
    /// Create a new API client with optional authentication token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout: Duration, now: DateTime<Utc>) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(t) = token.filter(|t| !t.is_empty()) {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder().user_agent("ebert").default_headers(headers).build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            now,
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, url: &str) -> ApiResult<reqwest::Response> {
        let resp = match super::resilient_http::resilient_get(&self.client, url, self.timeout).await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e),
        };

        let rate_limit = extract_rate_limit_from_headers(resp.headers());

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp, rate_limit);
        }

        if is_rate_limited(status, rate_limit) {
            // Rate limited - use rate limit info from headers or default to 1 hour
            let rate_limit = rate_limit.unwrap_or_else(|| RateLimitInfo {
                remaining: 0,
                reset_at: self.now + chrono::Duration::hours(1),
            });
            return ApiResult::RateLimited(rate_limit);
        }

        if status == StatusCode::NOT_FOUND {
            return ApiResult::NotFound;
        }

        match resp.error_for_status() {
            Ok(resp) => ApiResult::Failed(ohno::app_err!("unexpected HTTP status {} from {url}", resp.status())),
            Err(e) => ApiResult::Failed(e.into()),
        }
    }
}

/// A 429 is always a rate limit; a 403 only when the quota is exhausted
/// (otherwise it is a plain permission failure).
fn is_rate_limited(status: StatusCode, rate_limit: Option<RateLimitInfo>) -> bool {
    match status {
        StatusCode::TOO_MANY_REQUESTS => true,
        StatusCode::FORBIDDEN => rate_limit.is_none_or(|rl| rl.remaining == 0),
        _ => false,
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_limit(remaining: usize) -> RateLimitInfo {
        RateLimitInfo {
            remaining,
            reset_at: DateTime::from_timestamp(1_704_067_200, 0).unwrap(),
        }
    }

    #[test]
    fn test_extract_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("1704067200"));

        let rate_limit = extract_rate_limit_from_headers(&headers).unwrap();

        assert_eq!(rate_limit.remaining, 4999);
        assert_eq!(rate_limit.reset_at.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_extract_rate_limit_missing_headers() {
        let headers = HeaderMap::new();
        assert!(extract_rate_limit_from_headers(&headers).is_none());
    }

    #[test]
    fn test_extract_rate_limit_invalid_remaining() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("invalid"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("1704067200"));

        assert!(extract_rate_limit_from_headers(&headers).is_none());
    }

    #[test]
    fn test_is_rate_limited() {
        assert!(is_rate_limited(StatusCode::TOO_MANY_REQUESTS, None));
        assert!(is_rate_limited(StatusCode::FORBIDDEN, None));
        assert!(is_rate_limited(StatusCode::FORBIDDEN, Some(rate_limit(0))));
        assert!(!is_rate_limited(StatusCode::FORBIDDEN, Some(rate_limit(12))));
        assert!(!is_rate_limited(StatusCode::NOT_FOUND, Some(rate_limit(0))));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetSystemTimePreciseAsFileTime")]
    fn test_client_new_without_token() {
        let client = Client::new(None, "https://api.github.com", Duration::from_secs(5), Utc::now()).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetSystemTimePreciseAsFileTime")]
    fn test_client_new_with_token_trims_base_url() {
        let client = Client::new(Some("test_token"), "https://ghe.example.com/api/v3/", Duration::from_secs(5), Utc::now()).unwrap();
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetSystemTimePreciseAsFileTime")]
    fn test_client_rejects_invalid_token() {
        assert!(Client::new(Some("bad\ntoken"), "https://api.github.com", Duration::from_secs(5), Utc::now()).is_err());
    }
}
