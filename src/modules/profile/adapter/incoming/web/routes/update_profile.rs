use actix_web::{patch, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, warn};

use super::error_mapping::{map_field_error, map_invalid_user_id};
use crate::{
    profile::application::{
        domain::entities::{Preferences, UserId},
        ports::{
            incoming::use_cases::{
                UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
                UpdateProfileOutcome,
            },
            outgoing::{PatchField, ProfileChanges},
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//
// Omitted => Unset, null => Null, anything else => Value.
// Fields not listed here (role, id, created_at, ...) are ignored.
//

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub username: PatchField<String>,

    #[serde(default)]
    pub email: PatchField<String>,

    #[serde(default)]
    pub display_name: PatchField<String>,

    #[serde(default)]
    pub bio: PatchField<String>,

    #[serde(default)]
    pub avatar_url: PatchField<String>,

    #[serde(default)]
    pub preferences: PatchField<Preferences>,

    #[serde(default)]
    pub last_seen: PatchField<DateTime<Utc>>,
}

impl UpdateProfileRequest {
    fn into_parts(self) -> (Option<String>, ProfileChanges) {
        let changes = ProfileChanges {
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            preferences: self.preferences,
            last_seen: self.last_seen,
        };

        (self.user_id, changes)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[patch("/api/profiles/{user_id}")]
pub async fn update_profile_handler(
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match UserId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return map_invalid_user_id(err),
    };

    let (body_user_id, changes) = req.into_inner().into_parts();

    let command = match UpdateProfileCommand::new(user_id.clone(), changes, body_user_id) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.profile.update.execute(command).await {
        Ok(UpdateProfileOutcome::Updated(profile)) => ApiResponse::success(profile),

        Ok(UpdateProfileOutcome::Unconfirmed) => {
            warn!(user_id = %user_id, "Profile update committed but not confirmed");
            ApiResponse::success_with_warning(
                "UPDATE_UNCONFIRMED",
                "Profile was updated but the result could not be loaded",
            )
        }

        Err(err) => map_update_profile_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateProfileCommandError) -> HttpResponse {
    match err {
        UpdateProfileCommandError::EmptyUpdate => {
            ApiResponse::bad_request("EMPTY_UPDATE", "No fields to update")
        }
        UpdateProfileCommandError::UserIdMismatch => ApiResponse::bad_request(
            "USER_ID_MISMATCH",
            "user_id in body does not match the target profile",
        ),
        UpdateProfileCommandError::NullNotAllowed(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        UpdateProfileCommandError::InvalidField(field) => map_field_error(field),
    }
}

fn map_update_profile_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        UpdateProfileError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        UpdateProfileError::EmailTaken => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }
        UpdateProfileError::Conflict(msg) => ApiResponse::conflict("PROFILE_CONFLICT", &msg),
        UpdateProfileError::RepositoryError(e) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
