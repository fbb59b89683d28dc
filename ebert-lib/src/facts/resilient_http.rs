//! Resilient HTTP request utilities using retry and timeout middleware.
//!
//! Wraps HTTP GET requests with [`seatbelt`] retry and timeout middleware so that
//! transient network failures are masked automatically.

use core::time::Duration;
use layered::{Execute, Service, Stack};
use ohno::app_err;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use seatbelt::retry::{Backoff, Retry};
use seatbelt::timeout::Timeout;
use seatbelt::{RecoveryInfo, ResilienceContext};
use tick::Clock;

const LOG_TARGET: &str = "      http";

/// Maximum retry attempts (on top of the original request).
const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff between retries.
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// Delay used for a 429 response that carries no `Retry-After` header.
const DEFAULT_TOO_MANY_REQUESTS_DELAY_SECS: u64 = 5;

/// Upper bound on a server-requested delay; anything longer is surfaced as an error instead.
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Parse the `Retry-After` header value as seconds.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.parse::<u64>().ok()
}

/// Retry after a server-requested delay, unless that delay is unreasonably long.
fn retry_after(delay_secs: u64) -> RecoveryInfo {
    if delay_secs > MAX_RETRY_AFTER_SECS {
        RecoveryInfo::never()
    } else {
        RecoveryInfo::retry().delay(Duration::from_secs(delay_secs))
    }
}

/// Classify an HTTP status (plus headers) for retry purposes.
fn classify_status(status: StatusCode, headers: &HeaderMap) -> RecoveryInfo {
    match status {
        // Server errors (5xx) are transient.
        s if s.is_server_error() => RecoveryInfo::retry(),

        // Rate-limited (429): honor Retry-After if present, otherwise default to 5s.
        StatusCode::TOO_MANY_REQUESTS => retry_after(parse_retry_after(headers).unwrap_or(DEFAULT_TOO_MANY_REQUESTS_DELAY_SECS)),

        // Secondary rate limit (403 with Retry-After): wait the requested duration and retry.
        StatusCode::FORBIDDEN => parse_retry_after(headers).map_or_else(RecoveryInfo::never, retry_after),

        // Everything else (success, 4xx client errors) is not retried.
        _ => RecoveryInfo::never(),
    }
}

/// Classify an HTTP response for retry purposes.
fn should_retry_response(result: &crate::Result<reqwest::Response>) -> RecoveryInfo {
    match result {
        // Network / connection errors and timeouts are always transient.
        Err(_) => RecoveryInfo::retry(),
        Ok(resp) => classify_status(resp.status(), resp.headers()),
    }
}

/// Send an HTTP GET request with automatic retry and a per-attempt timeout.
///
/// Retries on network errors, timeouts, 5xx and 429 responses, and secondary rate limits,
/// with exponential backoff. The final response is returned as-is, whatever its status.
pub async fn resilient_get(client: &reqwest::Client, url: &str, timeout: Duration) -> crate::Result<reqwest::Response> {
    let clock = Clock::new_tokio();
    let context = ResilienceContext::new(&clock).name("github_get");
    let timeout_secs = timeout.as_secs();

    let client = client.clone();
    let service = (
        Retry::layer("retry", &context)
            .clone_input()
            .recovery_with(|result: &crate::Result<reqwest::Response>, _| should_retry_response(result))
            .max_retry_attempts(MAX_RETRY_ATTEMPTS)
            .base_delay(RETRY_BASE_DELAY)
            .backoff(Backoff::Exponential)
            .on_retry(|_output, args| {
                log::debug!(
                    target: LOG_TARGET,
                    "retrying HTTP GET (attempt {}, delay {}ms)",
                    args.attempt().index() + 1,
                    args.retry_delay().as_millis(),
                );
            }),
        Timeout::layer("timeout", &context)
            .timeout_error(move |_| app_err!("HTTP request timed out after {timeout_secs}s"))
            .timeout(timeout),
        Execute::new(move |url: String| {
            let client = client.clone();
            async move { client.get(&url).send().await.map_err(ohno::AppError::from) }
        }),
    )
        .into_service();

    service.execute(url.to_string()).await
}
