use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::{Profile, UserId},
    ports::{
        incoming::use_cases::{GetProfileError, GetProfileUseCase},
        outgoing::ProfileQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Profile, GetProfileError> {
        self.query
            .find_by_user_id(&user_id)
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
