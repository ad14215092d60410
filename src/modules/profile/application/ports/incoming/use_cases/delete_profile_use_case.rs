use async_trait::async_trait;

use crate::profile::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft delete. The row is kept as a tombstone and the identity, username
/// and email become free for a later create.
#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteProfileError>;
}
