use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

pub use crate::tests::support::profile_fixtures::sample_profile;

use crate::profile::application::{
    domain::entities::{Profile, UserId},
    ports::outgoing::{
        NewProfileData, ProfileChanges, ProfileQuery, ProfileQueryError, ProfileRepository,
        ProfileRepositoryError,
    },
};

mock! {
    pub ProfileQueryMock {}
    #[async_trait]
    impl ProfileQuery for ProfileQueryMock {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, ProfileQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError>;
    }
}

mock! {
    pub ProfileRepositoryMock {}
    #[async_trait]
    impl ProfileRepository for ProfileRepositoryMock {
        async fn insert(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError>;
        async fn merge_update(&self, id: Uuid, changes: ProfileChanges) -> Result<Profile, ProfileRepositoryError>;
        async fn soft_delete(&self, id: Uuid) -> Result<(), ProfileRepositoryError>;
    }
}
