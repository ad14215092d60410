use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_ROLE: &str = "user";
pub const MAX_USER_ID_LEN: usize = 255;

pub type Preferences = serde_json::Map<String, serde_json::Value>;

fn is_identity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '@')
}

//
// ──────────────────────────────────────────────────────────
// UserId (identity issued by the upstream auth service)
// ──────────────────────────────────────────────────────────
//

/// Identity token handed to us by the auth gateway.
///
/// Only the shape is checked: non-empty, bounded, and restricted to the
/// characters used by UUIDs and opaque ids. Whether the caller may act on
/// this identity is decided upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    #[error("user_id is required")]
    Empty,

    #[error("user_id must not exceed 255 characters")]
    TooLong,

    #[error("user_id contains invalid characters")]
    InvalidCharacters,
}

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, InvalidUserId> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(InvalidUserId::Empty);
        }

        if value.chars().count() > MAX_USER_ID_LEN {
            return Err(InvalidUserId::TooLong);
        }

        if !value.chars().all(is_identity_char) {
            return Err(InvalidUserId::InvalidCharacters);
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

/// A live profile. Tombstoned rows never materialise as `Profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub preferences: Preferences,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
