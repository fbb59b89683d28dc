//! Data collection for GitHub accounts
//!
//! This module is responsible for retrieving the raw activity records that the
//! scoring engine works from: the account profile, its repository listing, and
//! its public event history.
//!
//! # Implementation Model
//!
//! The record types ([`Profile`], [`Repository`], [`Event`]) are plain immutable
//! values deserialized straight from the GitHub REST API JSON.
//!
//! The [`Provider`] issues the requests through a small client that classifies
//! responses (success, rate limited, not found, failed) and retries transient
//! failures with exponential backoff. Listings are paginated until an empty or
//! short page is returned or a configured page cap is reached. A repository listing
//! whose last permitted page is still full is an error rather than a truncated
//! result; the event listing keeps what it has, as GitHub caps it anyway. The three listings
//! are fetched concurrently and only handed out once all of them are complete,
//! as a single [`ProfileData`]; a failure in any of them fails the whole fetch.

mod client;
mod event;
mod login;
mod profile;
mod progress;
mod provider;
mod repository;
pub(crate) mod resilient_http;

pub use event::{Event, PUSH_EVENT};
pub use login::Login;
pub use profile::Profile;
pub use progress::{NoProgress, Progress};
pub use provider::{ProfileData, Provider, ProviderOptions};
pub use repository::Repository;

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable string, mapping `null` to the empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
