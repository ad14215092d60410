use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use std::sync::Arc;

use crate::profile::application::domain::entities::{Profile, UserId};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

// SeaORM entity
use super::sea_orm_entity::{Column as ProfileColumn, Entity as ProfileEntity};

#[derive(Debug, Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_live(
        &self,
        select: Select<ProfileEntity>,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        let model = select
            .filter(ProfileColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| m.to_profile())
            .transpose()
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(ProfileEntity::find().filter(ProfileColumn::UserId.eq(user_id.value())))
            .await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(ProfileEntity::find().filter(ProfileColumn::Username.eq(username)))
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(ProfileEntity::find().filter(ProfileColumn::Email.eq(email)))
            .await
    }
}
