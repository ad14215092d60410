//! End-to-end profile lifecycle over the real services and an in-memory store.

use actix_web::{dev::ServiceResponse, http::StatusCode, test, App};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    profile::{
        adapter::incoming::web::routes::{
            create_profile_handler, delete_profile_handler, get_profile_handler,
            update_profile_handler,
        },
        application::{
            profile_use_cases::ProfileUseCases,
            services::{
                CreateProfileService, DeleteProfileService, GetProfileService,
                UpdateProfileService,
            },
        },
    },
    shared::api::custom_json_config,
    tests::support::{
        app_state_builder::TestAppStateBuilder, in_memory_profile_store::InMemoryProfileStore,
    },
};

fn use_cases(store: &InMemoryProfileStore) -> ProfileUseCases {
    ProfileUseCases {
        create: Arc::new(CreateProfileService::new(store.clone(), store.clone())),
        get: Arc::new(GetProfileService::new(store.clone())),
        update: Arc::new(UpdateProfileService::new(store.clone(), store.clone())),
        delete: Arc::new(DeleteProfileService::new(store.clone(), store.clone())),
    }
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_profile(use_cases($store))
                        .build(),
                )
                .app_data(custom_json_config())
                .service(create_profile_handler)
                .service(get_profile_handler)
                .service(update_profile_handler)
                .service(delete_profile_handler),
        )
        .await
    };
}

async fn read_json(resp: ServiceResponse) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}

fn create(user_id: &str, username: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/profiles")
        .insert_header(("X-User-Id", user_id))
        .set_json(json!({ "username": username, "email": email }))
}

fn get(user_id: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(&format!("/api/profiles/{user_id}"))
}

fn patch(user_id: &str, body: Value) -> test::TestRequest {
    test::TestRequest::patch()
        .uri(&format!("/api/profiles/{user_id}"))
        .set_json(body)
}

fn delete(user_id: &str) -> test::TestRequest {
    test::TestRequest::delete()
        .uri(&format!("/api/profiles/{user_id}"))
}

#[actix_web::test]
async fn full_lifecycle() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    // Create
    let resp = test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["data"]["user_id"], "u1");
    assert_eq!(created["data"]["role"], "user");
    assert_eq!(created["data"]["preferences"], json!({}));

    // Username collision from another user
    let resp = test::call_service(&app, create("u2", "alice", "b@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "USERNAME_TAKEN");

    // Get
    let resp = test::call_service(&app, get("u1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["data"]["username"], "alice");

    // Patch bio only
    let resp = test::call_service(&app, patch("u1", json!({ "bio": "hi" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["data"]["bio"], "hi");
    assert_eq!(updated["data"]["username"], "alice");
    assert_eq!(updated["data"]["email"], "a@x.com");

    // Delete
    let resp = test::call_service(&app, delete("u1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = test::call_service(&app, get("u1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(resp).await["error"]["code"], "PROFILE_NOT_FOUND");

    // The row is kept as a tombstone
    assert_eq!(store.row_count(), 1);
    assert_eq!(store.live_count(), 0);
}

#[actix_web::test]
async fn every_identity_field_is_unique_among_live_profiles() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    let resp = test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, create("u1", "carol", "c@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "PROFILE_ALREADY_EXISTS");

    let resp = test::call_service(&app, create("u2", "bob", "a@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "EMAIL_TAKEN");

    // Same rules apply when changing identity fields later
    let resp = test::call_service(&app, create("u2", "bob", "b@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, patch("u2", json!({ "username": "alice" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "USERNAME_TAKEN");

    let resp = test::call_service(&app, patch("u2", json!({ "email": "a@x.com" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "EMAIL_TAKEN");

    assert_eq!(store.live_count(), 2);
}

#[actix_web::test]
async fn repeating_a_patch_is_idempotent() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;

    let body = json!({ "display_name": "Alice", "preferences": { "theme": "dark" } });

    let first = read_json(test::call_service(&app, patch("u1", body.clone()).to_request()).await).await;
    let second = read_json(test::call_service(&app, patch("u1", body).to_request()).await).await;

    assert_eq!(first["data"], second["data"]);
    assert_eq!(second["data"]["preferences"]["theme"], "dark");
}

#[actix_web::test]
async fn patch_preserves_unmentioned_fields_and_clears_nulls() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    test::call_service(
        &app,
        patch(
            "u1",
            json!({ "bio": "hi", "avatar_url": "https://cdn.x/a.png", "display_name": "Alice" }),
        )
        .to_request(),
    )
    .await;

    let resp = test::call_service(&app, patch("u1", json!({ "avatar_url": null })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert!(json["data"]["avatar_url"].is_null());
    assert_eq!(json["data"]["bio"], "hi");
    assert_eq!(json["data"]["display_name"], "Alice");
    assert_eq!(json["data"]["username"], "alice");
}

#[actix_web::test]
async fn email_uniqueness_ignores_case() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;

    let resp = test::call_service(&app, create("u2", "bob", "A@X.COM").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "EMAIL_TAKEN");

    let resp = test::call_service(&app, create("u2", "bob", "Bob@X.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(read_json(resp).await["data"]["email"], "bob@x.com");

    let resp =
        test::call_service(&app, patch("u2", json!({ "email": "A@x.Com" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(resp).await["error"]["code"], "EMAIL_TAKEN");

    assert_eq!(store.live_count(), 2);
}

#[actix_web::test]
async fn bio_only_patch_keeps_role_and_preferences() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    let resp = test::call_service(
        &app,
        patch("u1", json!({ "preferences": { "theme": "dark" } })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, patch("u1", json!({ "bio": "hi" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["data"]["bio"], "hi");
    assert_eq!(json["data"]["username"], "alice");
    assert_eq!(json["data"]["email"], "a@x.com");
    assert_eq!(json["data"]["role"], "user");
    assert_eq!(json["data"]["preferences"], json!({ "theme": "dark" }));
}

#[actix_web::test]
async fn invalid_identity_is_rejected_on_every_route() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    let resp = test::call_service(&app, get("bad%20id").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(&app, patch("bad%20id", json!({ "bio": "hi" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["error"]["code"], "INVALID_USER_ID");

    let resp = test::call_service(&app, delete("bad%20id").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["error"]["code"], "INVALID_USER_ID");
}

#[actix_web::test]
async fn soft_delete_is_final() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;

    let resp = test::call_service(&app, delete("u1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete("u1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, patch("u1", json!({ "bio": "back" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn user_id_cannot_be_changed_through_patch() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;

    let resp = test::call_service(&app, patch("u1", json!({ "user_id": "u9", "bio": "x" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["error"]["code"], "USER_ID_MISMATCH");

    let resp = test::call_service(&app, get("u1").to_request()).await;
    let json = read_json(resp).await;
    assert_eq!(json["data"]["user_id"], "u1");
    assert!(json["data"]["bio"].is_null());

    let resp = test::call_service(&app, get("u9").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn identity_can_be_reused_after_delete() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    test::call_service(&app, delete("u1").to_request()).await;

    let resp = test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    assert_eq!(store.row_count(), 2);
    assert_eq!(store.live_count(), 1);
}

#[actix_web::test]
async fn store_read_failure_is_an_internal_error() {
    let store = InMemoryProfileStore::new();
    let app = app!(&store);

    test::call_service(&app, create("u1", "alice", "a@x.com").to_request()).await;

    store.fail_reads(true);
    let resp = test::call_service(&app, patch("u1", json!({ "bio": "hi" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    store.fail_reads(false);
    let json = read_json(test::call_service(&app, get("u1").to_request()).await).await;
    assert!(json["data"]["bio"].is_null());
}
