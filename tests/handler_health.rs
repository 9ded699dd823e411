mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use folio::api::handlers::health_handler;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    // An unconfigured image host degrades uploads, not the site.
    assert_eq!(json["checks"]["media"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("media").is_some());
}

#[sqlx::test]
async fn test_health_reports_post_count(pool: PgPool) {
    common::insert_published_post(&pool, "One", "one").await;
    common::insert_draft_post(&pool, "Two", "two").await;

    let server = make_server(pool);
    let json = server.get("/health").await.json::<serde_json::Value>();

    let message = json["checks"]["database"]["message"].as_str().unwrap();
    assert!(message.contains("2 posts"));
}
