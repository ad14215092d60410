use async_trait::async_trait;

use crate::profile::application::domain::{
    entities::{Profile, UserId},
    policies::{ProfileFieldError, ProfilePolicy},
};

//
// ──────────────────────────────────────────────────────────
// Create Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    user_id: UserId,
    username: String,
    email: String,
    role: String,
    avatar_url: Option<String>,
    display_name: Option<String>,
    bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProfileCommandError {
    #[error(transparent)]
    InvalidField(#[from] ProfileFieldError),
}

impl CreateProfileCommand {
    pub fn new(
        user_id: UserId,
        username: String,
        email: String,
        role: Option<String>,
        avatar_url: Option<String>,
        display_name: Option<String>,
        bio: Option<String>,
    ) -> Result<Self, CreateProfileCommandError> {
        let username = ProfilePolicy::username(&username)?;
        let email = ProfilePolicy::email(&email)?;
        let role = ProfilePolicy::role(role.as_deref())?;
        let avatar_url = avatar_url
            .as_deref()
            .map(ProfilePolicy::avatar_url)
            .transpose()?;
        let display_name = display_name
            .as_deref()
            .map(ProfilePolicy::display_name)
            .transpose()?;

        Ok(Self {
            user_id,
            username,
            email,
            role,
            avatar_url,
            display_name,
            bio,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn avatar_url(&self) -> Option<&String> {
        self.avatar_url.as_ref()
    }

    pub fn display_name(&self) -> Option<&String> {
        self.display_name.as_ref()
    }

    pub fn bio(&self) -> Option<&String> {
        self.bio.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile already exists")]
    ProfileAlreadyExists,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    /// A concurrent write won the unique index race and the store could not
    /// say which field collided.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, command: CreateProfileCommand) -> Result<Profile, CreateProfileError>;
}
