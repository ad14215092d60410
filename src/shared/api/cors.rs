// src/shared/api/cors.rs
use actix_web::{middleware::DefaultHeaders, options, HttpResponse, Responder};

const ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, \
Authorization, accept, origin, Cache-Control, X-Requested-With, X-User-Id";
const ALLOW_METHODS: &str = "POST, OPTIONS, GET, PUT, PATCH, DELETE";

/// Permissive CORS headers stamped on every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
        .add(("Access-Control-Allow-Methods", ALLOW_METHODS))
}

#[options("/api/profiles")]
pub async fn preflight_handler() -> impl Responder {
    HttpResponse::NoContent().finish()
}

#[options("/api/profiles/{user_id}")]
pub async fn preflight_item_handler() -> impl Responder {
    HttpResponse::NoContent().finish()
}
