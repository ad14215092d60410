use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::profile::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity, Model as ProfileModel,
};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::{
    NewProfileData, PatchField, ProfileChanges, ProfileRepository, ProfileRepositoryError,
    UniqueField,
};

// Partial unique indexes created by the user_profiles migration.
const USER_ID_INDEX: &str = "idx_user_profiles_user_id_live";
const USERNAME_INDEX: &str = "idx_user_profiles_username_live";
const EMAIL_INDEX: &str = "idx_user_profiles_email_live";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn insert(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.into()),
            username: Set(data.username),
            email: Set(data.email),
            display_name: Set(data.display_name),
            bio: Set(data.bio),
            avatar_url: Set(data.avatar_url),
            role: Set(data.role),
            preferences: Set(serde_json::Value::Object(data.preferences)),
            last_seen: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let result = model.insert(&*self.db).await.map_err(map_unique_error)?;

        model_to_profile(result)
    }

    async fn merge_update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(username) = changes.username {
            model.username = Set(username);
        }

        if let PatchField::Value(email) = changes.email {
            model.email = Set(email);
        }

        if let PatchField::Value(preferences) = changes.preferences {
            model.preferences = Set(serde_json::Value::Object(preferences));
        }

        match changes.display_name {
            PatchField::Unset => {}
            PatchField::Null => model.display_name = Set(None),
            PatchField::Value(name) => model.display_name = Set(Some(name)),
        }

        match changes.bio {
            PatchField::Unset => {}
            PatchField::Null => model.bio = Set(None),
            PatchField::Value(bio) => model.bio = Set(Some(bio)),
        }

        match changes.avatar_url {
            PatchField::Unset => {}
            PatchField::Null => model.avatar_url = Set(None),
            PatchField::Value(url) => model.avatar_url = Set(Some(url)),
        }

        match changes.last_seen {
            PatchField::Unset => {}
            PatchField::Null => model.last_seen = Set(None),
            PatchField::Value(at) => model.last_seen = Set(Some(at.fixed_offset())),
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_unique_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        model_to_profile(result)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            deleted_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn model_to_profile(model: ProfileModel) -> Result<Profile, ProfileRepositoryError> {
    model
        .to_profile()
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn map_unique_error(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string().to_lowercase();

    if !(msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505")) {
        return map_db_err(e);
    }

    let field = if msg.contains(USER_ID_INDEX) {
        UniqueField::UserId
    } else if msg.contains(USERNAME_INDEX) {
        UniqueField::Username
    } else if msg.contains(EMAIL_INDEX) {
        UniqueField::Email
    } else {
        UniqueField::Unknown
    };

    ProfileRepositoryError::UniqueViolation(field)
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
