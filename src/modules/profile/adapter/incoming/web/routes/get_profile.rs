use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::error_mapping::map_invalid_user_id;
use crate::{
    profile::application::{
        domain::entities::UserId, ports::incoming::use_cases::GetProfileError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/profiles/{user_id}")]
pub async fn get_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match UserId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return map_invalid_user_id(err),
    };

    match data.profile.get.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_get_profile_error(err),
    }
}

fn map_get_profile_error(err: GetProfileError) -> HttpResponse {
    match err {
        GetProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        GetProfileError::QueryError(msg) => {
            error!("Failed to get profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
