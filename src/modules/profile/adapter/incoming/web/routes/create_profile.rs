use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use super::error_mapping::{map_field_error, map_invalid_user_id};
use crate::{
    profile::{
        adapter::incoming::web::extractors::GatewayIdentity,
        application::{
            domain::entities::UserId,
            ports::incoming::use_cases::{
                CreateProfileCommand, CreateProfileCommandError, CreateProfileError,
            },
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

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/profiles")]
pub async fn create_profile_handler(
    identity: GatewayIdentity,
    data: web::Data<AppState>,
    payload: web::Json<CreateProfileRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    // 1️⃣ Resolve identity (gateway header and/or body)
    let user_id = match resolve_identity(identity.user_id, req.user_id.as_deref()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // 2️⃣ Build command (validation happens here)
    let command = match CreateProfileCommand::new(
        user_id,
        req.username,
        req.email,
        req.role,
        req.avatar_url,
        req.display_name,
        req.bio,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 3️⃣ Execute use case
    match data.profile.create.execute(command).await {
        Ok(profile) => ApiResponse::created(profile),
        Err(err) => map_create_profile_error(err),
    }
}

/// The header wins when only it is present; when both are present they must
/// agree.
fn resolve_identity(header: Option<UserId>, body: Option<&str>) -> Result<UserId, HttpResponse> {
    let from_body = match body {
        Some(raw) => Some(UserId::parse(raw).map_err(map_invalid_user_id)?),
        None => None,
    };

    match (header, from_body) {
        (Some(h), Some(b)) if h != b => Err(ApiResponse::bad_request(
            "USER_ID_MISMATCH",
            "user_id in body does not match the authenticated identity",
        )),
        (Some(id), _) | (None, Some(id)) => Ok(id),
        (None, None) => Err(ApiResponse::bad_request(
            "MISSING_USER_ID",
            "user_id is required",
        )),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateProfileCommandError) -> HttpResponse {
    match err {
        CreateProfileCommandError::InvalidField(field) => map_field_error(field),
    }
}

fn map_create_profile_error(err: CreateProfileError) -> HttpResponse {
    match err {
        CreateProfileError::ProfileAlreadyExists => {
            ApiResponse::conflict("PROFILE_ALREADY_EXISTS", "Profile already exists")
        }
        CreateProfileError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        CreateProfileError::EmailTaken => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }
        CreateProfileError::Conflict(msg) => ApiResponse::conflict("PROFILE_CONFLICT", &msg),
        CreateProfileError::RepositoryError(e) => {
            error!("Repository error creating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
