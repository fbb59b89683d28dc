use super::null_as_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a GitHub account as returned by `GET /users/{login}`.
///
/// Optional text fields that GitHub reports as `null` are stored as empty strings,
/// so "present" always means "non-empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub blog: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,

    #[serde(default)]
    pub public_repos: i64,

    #[serde(default)]
    pub followers: i64,

    #[serde(default)]
    pub following: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar_url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter_username: String,
}

impl Profile {
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    #[must_use]
    pub fn has_company(&self) -> bool {
        !self.company.is_empty()
    }

    #[must_use]
    pub fn has_blog(&self) -> bool {
        !self.blog.is_empty()
    }

    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    #[must_use]
    pub fn has_twitter_username(&self) -> bool {
        !self.twitter_username.is_empty()
    }

    /// Whether any of company, blog, or email is filled in.
    #[must_use]
    pub fn has_contact_info(&self) -> bool {
        self.has_company() || self.has_blog() || self.has_email()
    }
}
