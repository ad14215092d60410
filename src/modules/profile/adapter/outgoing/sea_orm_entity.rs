use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::profile::application::domain::entities::{InvalidUserId, Preferences, Profile, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(string_len = 255)]
    pub user_id: String,

    #[sea_orm(string_len = 255)]
    pub username: String,

    #[sea_orm(string_len = 255)]
    pub email: String,

    #[sea_orm(string_len = 255, nullable)]
    pub display_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(string_len = 255, nullable)]
    pub avatar_url: Option<String>,

    #[sea_orm(string_len = 50)]
    pub role: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub preferences: Json,

    #[sea_orm(nullable)]
    pub last_seen: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    // NULL while live, set once on soft delete
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelConversionError {
    #[error("Stored user_id is invalid: {0}")]
    InvalidUserId(#[from] InvalidUserId),

    #[error("Stored preferences are not a JSON object")]
    InvalidPreferences,
}

impl Model {
    pub fn to_profile(&self) -> Result<Profile, ModelConversionError> {
        let preferences = match &self.preferences {
            Json::Object(map) => map.clone(),
            Json::Null => Preferences::new(),
            _ => return Err(ModelConversionError::InvalidPreferences),
        };

        Ok(Profile {
            id: self.id,
            user_id: UserId::parse(&self.user_id)?,
            username: self.username.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
            role: self.role.clone(),
            preferences,
            last_seen: self.last_seen.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
