use async_trait::async_trait;
use tracing::{info, warn};

use crate::profile::application::{
    domain::entities::Profile,
    ports::{
        incoming::use_cases::{
            UpdateProfileCommand, UpdateProfileError, UpdateProfileOutcome, UpdateProfileUseCase,
        },
        outgoing::{
            ProfileChanges, ProfileQuery, ProfileQueryError, ProfileRepository,
            ProfileRepositoryError, UniqueField,
        },
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    /// Rejects a username or email already held by another live profile.
    async fn ensure_unique(
        &self,
        current: &Profile,
        changes: &ProfileChanges,
    ) -> Result<(), UpdateProfileError> {
        if let Some(username) = changes.username.as_value() {
            let holder = self
                .query
                .find_by_username(username)
                .await
                .map_err(map_query_error)?;

            if holder.is_some_and(|p| p.id != current.id) {
                warn!(user_id = %current.user_id, username = %username, "Username already taken");
                return Err(UpdateProfileError::UsernameTaken);
            }
        }

        if let Some(email) = changes.email.as_value() {
            let holder = self
                .query
                .find_by_email(email)
                .await
                .map_err(map_query_error)?;

            if holder.is_some_and(|p| p.id != current.id) {
                warn!(user_id = %current.user_id, "Email already registered");
                return Err(UpdateProfileError::EmailTaken);
            }
        }

        Ok(())
    }
}

fn map_query_error(e: ProfileQueryError) -> UpdateProfileError {
    UpdateProfileError::RepositoryError(e.to_string())
}

fn map_repository_error(e: ProfileRepositoryError) -> UpdateProfileError {
    match e {
        ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
        ProfileRepositoryError::UniqueViolation(UniqueField::Username) => {
            UpdateProfileError::UsernameTaken
        }
        ProfileRepositoryError::UniqueViolation(UniqueField::Email) => {
            UpdateProfileError::EmailTaken
        }
        ProfileRepositoryError::UniqueViolation(field) => {
            UpdateProfileError::Conflict(format!("Unique constraint violated on {}", field))
        }
        other => UpdateProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutcome, UpdateProfileError> {
        let (user_id, changes) = command.into_parts();

        // 1️⃣ Load current state
        let current = self
            .query
            .find_by_user_id(&user_id)
            .await
            .map_err(map_query_error)?
            .ok_or(UpdateProfileError::NotFound)?;

        // 2️⃣ Nothing differs => no write, updated_at stays put
        let changes = changes.without_noops(&current);
        if changes.is_empty() {
            return Ok(UpdateProfileOutcome::Updated(current));
        }

        // 3️⃣ Uniqueness pre-checks
        self.ensure_unique(&current, &changes).await?;

        // 4️⃣ Merge
        self.repository
            .merge_update(current.id, changes)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user_id, profile_id = %current.id, "Profile updated");

        // 5️⃣ Read back. The write is already committed at this point.
        match self.query.find_by_user_id(&user_id).await {
            Ok(Some(profile)) => Ok(UpdateProfileOutcome::Updated(profile)),
            Ok(None) => {
                warn!(user_id = %user_id, "Updated profile vanished before read-back");
                Ok(UpdateProfileOutcome::Unconfirmed)
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to read back updated profile");
                Ok(UpdateProfileOutcome::Unconfirmed)
            }
        }
    }
}
