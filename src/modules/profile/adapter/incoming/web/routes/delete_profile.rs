use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use super::error_mapping::map_invalid_user_id;
use crate::{
    profile::application::{
        domain::entities::UserId, ports::incoming::use_cases::DeleteProfileError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/profiles/{user_id}")]
pub async fn delete_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match UserId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return map_invalid_user_id(err),
    };

    match data.profile.delete.execute(user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_profile_error(err),
    }
}

fn map_delete_profile_error(err: DeleteProfileError) -> HttpResponse {
    match err {
        DeleteProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        DeleteProfileError::RepositoryError(msg) => {
            error!("Repository error deleting profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
