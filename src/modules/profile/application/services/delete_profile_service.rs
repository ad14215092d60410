use async_trait::async_trait;
use tracing::info;

use crate::profile::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{DeleteProfileError, DeleteProfileUseCase},
        outgoing::{ProfileQuery, ProfileRepository, ProfileRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteProfileUseCase for DeleteProfileService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteProfileError> {
        // 1️⃣ Resolve the live row
        let profile = self
            .query
            .find_by_user_id(&user_id)
            .await
            .map_err(|e| DeleteProfileError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProfileError::NotFound)?;

        // 2️⃣ Tombstone it
        self.repository
            .soft_delete(profile.id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
                other => DeleteProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, profile_id = %profile.id, "Profile soft deleted");

        Ok(())
    }
}
