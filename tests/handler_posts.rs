mod common;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use folio::api::handlers::{
    create_post_handler, delete_post_handler, list_posts_handler, update_post_handler,
};
use folio::api::middleware::auth;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/admin/posts", get(list_posts_handler))
        .route("/api/admin/posts", post(create_post_handler))
        .route("/api/admin/posts", put(update_post_handler))
        .route("/api/admin/posts", delete(delete_post_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Same routes with the cookie guard attached, for auth tests.
fn make_guarded_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/admin/posts", get(list_posts_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_posts_newest_created_first(pool: PgPool) {
    common::insert_draft_post(&pool, "Older", "older").await;
    common::insert_published_post(&pool, "Newer", "newer").await;

    let server = make_server(pool);
    let response = server.get("/api/admin/posts").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Ids break the tie when created_at collides inside one test run.
    assert_eq!(items[0]["title"], "Newer");
    assert_eq!(items[1]["title"], "Older");
}

#[sqlx::test]
async fn test_list_posts_includes_drafts(pool: PgPool) {
    common::insert_draft_post(&pool, "Hidden Draft", "hidden-draft").await;

    let server = make_server(pool);
    let body = server.get("/api/admin/posts").await.json::<serde_json::Value>();

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["published"], false);
    assert!(items[0]["published_at"].is_null());
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_post_published_stamps_timestamp(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({
            "title": "Hello World",
            "slug": "hello-world",
            "subtitle": "A greeting",
            "body_html": "<p>Hi</p>",
            "published": true
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Hello World");
    assert_eq!(body["slug"], "hello-world");
    assert_eq!(body["published"], true);
    assert!(body["published_at"].is_string());
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[sqlx::test]
async fn test_create_draft_has_no_published_at(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({ "title": "Draft", "slug": "draft", "published": false }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["published"], false);
    assert!(body["published_at"].is_null());
}

#[sqlx::test]
async fn test_create_post_honors_supplied_published_at(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({
            "title": "Backdated",
            "slug": "backdated",
            "published": true,
            "published_at": "2024-06-01T12:00:00Z"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert!(body["published_at"].as_str().unwrap().starts_with("2024-06-01"));
}

#[sqlx::test]
async fn test_create_post_trims_fields(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({
            "title": "  Padded  ",
            "slug": "  padded  ",
            "subtitle": "   ",
            "published": false
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Padded");
    assert_eq!(body["slug"], "padded");
    // A blank subtitle collapses to null rather than whitespace.
    assert!(body["subtitle"].is_null());
}

#[sqlx::test]
async fn test_create_post_requires_title_and_slug(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({ "title": "   ", "slug": "" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Title and slug are required");
}

#[sqlx::test]
async fn test_create_post_rejects_invalid_slug(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({ "title": "Bad Slug", "slug": "Bad Slug!" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_post_rejects_reserved_slug(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({ "title": "Sneaky", "slug": "admin" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "This slug is reserved");
}

#[sqlx::test]
async fn test_create_post_duplicate_slug_conflicts(pool: PgPool) {
    common::insert_published_post(&pool, "First", "taken").await;

    let server = make_server(pool);
    let response = server
        .post("/api/admin/posts")
        .json(&json!({ "title": "Second", "slug": "taken" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_post_changes_fields(pool: PgPool) {
    let id = common::insert_draft_post(&pool, "Before", "before").await;

    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({
            "id": id,
            "title": "After",
            "slug": "after",
            "body_html": "<p>new body</p>",
            "published": false
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "After");
    assert_eq!(body["slug"], "after");
    assert_eq!(body["body_html"], "<p>new body</p>");
}

#[sqlx::test]
async fn test_update_post_publish_stamps_timestamp(pool: PgPool) {
    let id = common::insert_draft_post(&pool, "Draft", "goes-live").await;

    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({
            "id": id,
            "title": "Draft",
            "slug": "goes-live",
            "published": true
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["published"], true);
    assert!(body["published_at"].is_string());
}

#[sqlx::test]
async fn test_update_post_unpublish_clears_timestamp(pool: PgPool) {
    let id = common::insert_published_post(&pool, "Live", "goes-dark").await;

    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({
            "id": id,
            "title": "Live",
            "slug": "goes-dark",
            "published": false
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["published"], false);
    assert!(body["published_at"].is_null());
}

#[sqlx::test]
async fn test_update_post_missing_id_rejected(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({ "title": "No Id", "slug": "no-id" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Missing id");
}

#[sqlx::test]
async fn test_update_post_unknown_id_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({ "id": 9999, "title": "Ghost", "slug": "ghost" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_post_slug_conflict(pool: PgPool) {
    common::insert_published_post(&pool, "Holder", "held").await;
    let id = common::insert_draft_post(&pool, "Mover", "moving").await;

    let server = make_server(pool);
    let response = server
        .put("/api/admin/posts")
        .json(&json!({ "id": id, "title": "Mover", "slug": "held" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_post_success(pool: PgPool) {
    let id = common::insert_published_post(&pool, "Doomed", "doomed").await;

    let server = make_server(pool);
    let response = server.delete(&format!("/api/admin/posts?id={}", id)).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let body = server.get("/api/admin/posts").await.json::<serde_json::Value>();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_post_missing_id(pool: PgPool) {
    let server = make_server(pool);
    let response = server.delete("/api/admin/posts").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Missing id");
}

#[sqlx::test]
async fn test_delete_post_unknown_id_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server.delete("/api/admin/posts?id=424242").await;

    response.assert_status_not_found();
}

// ─── Auth guard ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_posts_require_admin_cookie(pool: PgPool) {
    let server = make_guarded_server(pool);

    let response = server.get("/api/admin/posts").await;
    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_posts_allow_admin_cookie(pool: PgPool) {
    let server = make_guarded_server(pool);

    let response = server
        .get("/api/admin/posts")
        .add_header("cookie", common::ADMIN_COOKIE)
        .await;

    response.assert_status_ok();
}
