use email_address::EmailAddress;

use crate::profile::application::domain::entities::DEFAULT_ROLE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFieldError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must not exceed 255 characters")]
    UsernameTooLong,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email must not exceed 255 characters")]
    EmailTooLong,

    #[error("Role must not exceed 50 characters")]
    RoleTooLong,

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Shape rules shared by the create and update commands.
///
/// Length limits mirror the column sizes of `user_profiles`.
#[derive(Debug, Clone, Copy)]
pub struct ProfilePolicy;

impl ProfilePolicy {
    pub const MAX_USERNAME_LEN: usize = 255;
    pub const MAX_EMAIL_LEN: usize = 255;
    pub const MAX_ROLE_LEN: usize = 50;
    pub const MAX_DISPLAY_NAME_LEN: usize = 255;
    pub const MAX_AVATAR_URL_LEN: usize = 255;

    pub fn username(raw: &str) -> Result<String, ProfileFieldError> {
        let username = raw.trim();

        if username.is_empty() {
            return Err(ProfileFieldError::EmptyUsername);
        }

        if username.chars().count() > Self::MAX_USERNAME_LEN {
            return Err(ProfileFieldError::UsernameTooLong);
        }

        Ok(username.to_string())
    }

    /// Addresses are stored lowercased so case variants of one mailbox collide
    /// on the unique email index.
    pub fn email(raw: &str) -> Result<String, ProfileFieldError> {
        let email = raw.trim();

        if email.is_empty() {
            return Err(ProfileFieldError::EmptyEmail);
        }

        if email.chars().count() > Self::MAX_EMAIL_LEN {
            return Err(ProfileFieldError::EmailTooLong);
        }

        if !EmailAddress::is_valid(email) {
            return Err(ProfileFieldError::InvalidEmail);
        }

        Ok(email.to_lowercase())
    }

    /// Missing or blank roles fall back to [`DEFAULT_ROLE`].
    pub fn role(raw: Option<&str>) -> Result<String, ProfileFieldError> {
        let role = raw.map(str::trim).unwrap_or_default();

        if role.is_empty() {
            return Ok(DEFAULT_ROLE.to_string());
        }

        if role.chars().count() > Self::MAX_ROLE_LEN {
            return Err(ProfileFieldError::RoleTooLong);
        }

        Ok(role.to_string())
    }

    pub fn display_name(raw: &str) -> Result<String, ProfileFieldError> {
        Self::bounded("display_name", raw, Self::MAX_DISPLAY_NAME_LEN)
    }

    pub fn avatar_url(raw: &str) -> Result<String, ProfileFieldError> {
        Self::bounded("avatar_url", raw.trim(), Self::MAX_AVATAR_URL_LEN)
    }

    fn bounded(field: &'static str, raw: &str, max: usize) -> Result<String, ProfileFieldError> {
        if raw.chars().count() > max {
            return Err(ProfileFieldError::TooLong { field, max });
        }

        Ok(raw.to_string())
    }
}
