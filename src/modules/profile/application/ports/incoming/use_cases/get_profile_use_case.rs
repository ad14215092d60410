use async_trait::async_trait;

use crate::profile::application::domain::entities::{Profile, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Profile, GetProfileError>;
}
