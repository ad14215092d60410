use async_trait::async_trait;

use crate::profile::application::{
    domain::{
        entities::{Profile, UserId},
        policies::{ProfileFieldError, ProfilePolicy},
    },
    ports::outgoing::{PatchField, ProfileChanges},
};

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    changes: ProfileChanges,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("No fields to update")]
    EmptyUpdate,

    #[error("user_id in body does not match the target profile")]
    UserIdMismatch,

    #[error("{0} cannot be null")]
    NullNotAllowed(&'static str),

    #[error(transparent)]
    InvalidField(#[from] ProfileFieldError),
}

impl UpdateProfileCommand {
    /// `body_user_id` is the identity echoed in the payload, if any. It may
    /// only repeat the target identity; it never changes it.
    pub fn new(
        user_id: UserId,
        changes: ProfileChanges,
        body_user_id: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        if let Some(raw) = body_user_id.as_deref() {
            if raw.trim() != user_id.value() {
                return Err(UpdateProfileCommandError::UserIdMismatch);
            }
        }

        if changes.is_empty() {
            return Err(UpdateProfileCommandError::EmptyUpdate);
        }

        let changes = ProfileChanges {
            username: required(changes.username, "username")?
                .try_map(|v| ProfilePolicy::username(&v))?,
            email: required(changes.email, "email")?.try_map(|v| ProfilePolicy::email(&v))?,
            display_name: changes
                .display_name
                .try_map(|v| ProfilePolicy::display_name(&v))?,
            bio: changes.bio,
            avatar_url: changes
                .avatar_url
                .try_map(|v| ProfilePolicy::avatar_url(&v))?,
            preferences: required(changes.preferences, "preferences")?,
            last_seen: changes.last_seen,
        };

        Ok(Self { user_id, changes })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }

    pub fn into_parts(self) -> (UserId, ProfileChanges) {
        (self.user_id, self.changes)
    }
}

fn required<T>(
    field: PatchField<T>,
    name: &'static str,
) -> Result<PatchField<T>, UpdateProfileCommandError> {
    if field.is_null() {
        return Err(UpdateProfileCommandError::NullNotAllowed(name));
    }
    Ok(field)
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error / Outcome
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateProfileOutcome {
    /// Write committed and the stored record was read back.
    Updated(Profile),

    /// Write committed but the read-back failed. Nothing was rolled back.
    Unconfirmed,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutcome, UpdateProfileError>;
}
