use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::{profile::application::domain::entities::UserId, shared::api::ApiResponse};

/// Header set by the upstream auth gateway after it has authenticated the
/// caller.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Identity forwarded by the gateway, if any. A present but malformed header
/// is rejected; an absent one is left to the handler to resolve.
#[derive(Debug, Clone)]
pub struct GatewayIdentity {
    pub user_id: Option<UserId>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for GatewayIdentity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = match req.headers().get(USER_ID_HEADER) {
            Some(value) => value,
            None => return ready(Ok(GatewayIdentity { user_id: None })),
        };

        let parsed = raw
            .to_str()
            .ok()
            .and_then(|value| UserId::parse(value).ok());

        match parsed {
            Some(user_id) => ready(Ok(GatewayIdentity {
                user_id: Some(user_id),
            })),
            None => ready(Err(create_api_error(ApiResponse::bad_request(
                "INVALID_USER_ID",
                "Invalid X-User-Id header",
            )))),
        }
    }
}
