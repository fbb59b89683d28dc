use super::null_as_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the `GET /users/{login}/repos` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(clippy::struct_field_names, reason = "field names match GitHub API exactly")]
pub struct Repository {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Primary language label. Free text; empty when GitHub could not detect one.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,

    #[serde(default)]
    pub stargazers_count: i64,

    #[serde(default)]
    pub forks_count: i64,

    #[serde(default)]
    pub archived: bool,

    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub has_pages: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
}
