use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type tag of the only event kind that carries scoring weight.
pub const PUSH_EVENT: &str = "PushEvent";

/// One entry of the `GET /users/{login}/events/public` listing.
///
/// Only the number of commits in the payload is retained; the payload itself is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub commit_count: i64,
}

impl Event {
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }
}

/// Wire shape of an event.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default)]
    kind: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    payload: serde_json::Value,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        // absent payload, missing key, or a non-list all count as zero commits
        let commit_count = raw
            .payload
            .get("commits")
            .and_then(serde_json::Value::as_array)
            .map_or(0, |commits| i64::try_from(commits.len()).unwrap_or(i64::MAX));

        Self {
            kind: raw.kind,
            created_at: raw.created_at,
            commit_count,
        }
    }
}
