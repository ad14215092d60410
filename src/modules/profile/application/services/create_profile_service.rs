use async_trait::async_trait;
use tracing::{info, warn};

use crate::profile::application::{
    domain::entities::{Preferences, Profile},
    ports::{
        incoming::use_cases::{CreateProfileCommand, CreateProfileError, CreateProfileUseCase},
        outgoing::{
            NewProfileData, ProfileQuery, ProfileQueryError, ProfileRepository,
            ProfileRepositoryError, UniqueField,
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

fn map_query_error(e: ProfileQueryError) -> CreateProfileError {
    CreateProfileError::RepositoryError(e.to_string())
}

fn map_repository_error(e: ProfileRepositoryError) -> CreateProfileError {
    match e {
        ProfileRepositoryError::UniqueViolation(UniqueField::UserId) => {
            CreateProfileError::ProfileAlreadyExists
        }
        ProfileRepositoryError::UniqueViolation(UniqueField::Username) => {
            CreateProfileError::UsernameTaken
        }
        ProfileRepositoryError::UniqueViolation(UniqueField::Email) => {
            CreateProfileError::EmailTaken
        }
        ProfileRepositoryError::UniqueViolation(UniqueField::Unknown) => {
            CreateProfileError::Conflict("Profile conflicts with an existing profile".to_string())
        }
        other => CreateProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<Q, R> CreateProfileUseCase for CreateProfileService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProfileCommand) -> Result<Profile, CreateProfileError> {
        let user_id = command.user_id();

        // Pre-checks only sharpen the error; the unique indexes decide races.
        if self
            .query
            .find_by_user_id(user_id)
            .await
            .map_err(map_query_error)?
            .is_some()
        {
            warn!(user_id = %user_id, "Profile already exists");
            return Err(CreateProfileError::ProfileAlreadyExists);
        }

        if self
            .query
            .find_by_username(command.username())
            .await
            .map_err(map_query_error)?
            .is_some()
        {
            warn!(user_id = %user_id, username = %command.username(), "Username already taken");
            return Err(CreateProfileError::UsernameTaken);
        }

        if self
            .query
            .find_by_email(command.email())
            .await
            .map_err(map_query_error)?
            .is_some()
        {
            warn!(user_id = %user_id, "Email already registered");
            return Err(CreateProfileError::EmailTaken);
        }

        let data = NewProfileData {
            user_id: user_id.clone(),
            username: command.username().to_string(),
            email: command.email().to_string(),
            display_name: command.display_name().cloned(),
            bio: command.bio().cloned(),
            avatar_url: command.avatar_url().cloned(),
            role: command.role().to_string(),
            preferences: Preferences::new(),
        };

        let profile = self
            .repository
            .insert(data)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %profile.user_id, profile_id = %profile.id, "Profile created");

        Ok(profile)
    }
}
