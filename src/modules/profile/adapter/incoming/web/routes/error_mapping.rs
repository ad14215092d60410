use actix_web::HttpResponse;

use crate::{
    profile::application::domain::{entities::InvalidUserId, policies::ProfileFieldError},
    shared::api::ApiResponse,
};

pub(super) fn map_invalid_user_id(err: InvalidUserId) -> HttpResponse {
    ApiResponse::bad_request("INVALID_USER_ID", &err.to_string())
}

pub(super) fn map_field_error(err: ProfileFieldError) -> HttpResponse {
    let code = match err {
        ProfileFieldError::EmptyUsername | ProfileFieldError::UsernameTooLong => {
            "INVALID_USERNAME"
        }
        ProfileFieldError::EmptyEmail
        | ProfileFieldError::InvalidEmail
        | ProfileFieldError::EmailTooLong => "INVALID_EMAIL",
        ProfileFieldError::RoleTooLong => "INVALID_ROLE",
        ProfileFieldError::TooLong { .. } => "VALIDATION_ERROR",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
