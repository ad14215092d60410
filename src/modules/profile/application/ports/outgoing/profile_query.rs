use async_trait::async_trait;

use crate::profile::application::domain::entities::{Profile, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the profile store.
///
/// Every lookup ignores tombstoned rows; `Ok(None)` means no live profile.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_user_id(&self, user_id: &UserId)
        -> Result<Option<Profile>, ProfileQueryError>;

    async fn find_by_username(&self, username: &str)
        -> Result<Option<Profile>, ProfileQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError>;
}
