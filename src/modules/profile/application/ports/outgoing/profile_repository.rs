// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::application::domain::entities::{Preferences, Profile, UserId};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v (an empty string is a value, not "absent")
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<PatchField<U>, E> {
        Ok(match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)?),
        })
    }
}

impl<T: PartialEq> PatchField<T> {
    /// True when applying this patch to a nullable column holding `current`
    /// would leave it unchanged.
    fn is_noop_for(&self, current: Option<&T>) -> bool {
        match self {
            PatchField::Unset => true,
            PatchField::Null => current.is_none(),
            PatchField::Value(v) => current == Some(v),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewProfileData {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub preferences: Preferences,
}

/// Sparse field set for a merge update.
///
/// - username/email/preferences: Value => replace (Null is rejected before
///   reaching the store)
/// - display_name/bio/avatar_url/last_seen: Unset => keep, Null => clear,
///   Value => set
///
/// `id`, `user_id`, `created_at` and `deleted_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub username: PatchField<String>,
    pub email: PatchField<String>,
    pub display_name: PatchField<String>,
    pub bio: PatchField<String>,
    pub avatar_url: PatchField<String>,
    pub preferences: PatchField<Preferences>,
    pub last_seen: PatchField<DateTime<Utc>>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_unset()
            && self.email.is_unset()
            && self.display_name.is_unset()
            && self.bio.is_unset()
            && self.avatar_url.is_unset()
            && self.preferences.is_unset()
            && self.last_seen.is_unset()
    }

    /// Drops every field whose supplied value already matches `current`.
    pub fn without_noops(mut self, current: &Profile) -> Self {
        if self.username.is_noop_for(Some(&current.username)) {
            self.username = PatchField::Unset;
        }
        if self.email.is_noop_for(Some(&current.email)) {
            self.email = PatchField::Unset;
        }
        if self.display_name.is_noop_for(current.display_name.as_ref()) {
            self.display_name = PatchField::Unset;
        }
        if self.bio.is_noop_for(current.bio.as_ref()) {
            self.bio = PatchField::Unset;
        }
        if self.avatar_url.is_noop_for(current.avatar_url.as_ref()) {
            self.avatar_url = PatchField::Unset;
        }
        if self.preferences.is_noop_for(Some(&current.preferences)) {
            self.preferences = PatchField::Unset;
        }
        if self.last_seen.is_noop_for(current.last_seen.as_ref()) {
            self.last_seen = PatchField::Unset;
        }
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Which live-row unique index a write collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    UserId,
    Username,
    Email,
    /// The store reported a unique violation it could not attribute.
    Unknown,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::UserId => write!(f, "user_id"),
            UniqueField::Username => write!(f, "username"),
            UniqueField::Email => write!(f, "email"),
            UniqueField::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// No live row with the given id.
    #[error("Profile not found")]
    NotFound,

    #[error("Unique constraint violated on {0}")]
    UniqueViolation(UniqueField),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side, user_profiles table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn insert(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError>;

    /// Applies only the supplied fields to the live row `id`.
    async fn merge_update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Tombstones the live row `id`. A row that is already deleted is
    /// reported as `NotFound`.
    async fn soft_delete(&self, id: Uuid) -> Result<(), ProfileRepositoryError>;
}
