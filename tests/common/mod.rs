#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use folio::application::services::{
    AuthService, ExperienceService, PortfolioService, PostService,
};
use folio::infrastructure::media::{ImageHost, NullImageHost};
use folio::infrastructure::persistence::{
    PgExperienceRepository, PgPortfolioRepository, PgPostRepository,
};
use folio::state::{AppState, SiteMeta};

/// Admin password wired into every test state.
pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Cookie value the login endpoint sets and the guards check.
pub const ADMIN_COOKIE: &str = "admin=1";

pub async fn insert_published_post(pool: &PgPool, title: &str, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, body_html, published, published_at)
         VALUES ($1, $2, '<p>body</p>', TRUE, NOW()) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_draft_post(pool: &PgPool, title: &str, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, body_html, published)
         VALUES ($1, $2, '<p>draft body</p>', FALSE) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_post_with_cover(pool: &PgPool, slug: &str, cover_url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, cover_image_url, published, published_at)
         VALUES ('Covered', $1, $2, TRUE, NOW()) RETURNING id",
    )
    .bind(slug)
    .bind(cover_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_experience(pool: &PgPool, name: &str, role: &str, sort_order: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO experience (name, role, sort_order) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(role)
    .bind(sort_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_portfolio(pool: &PgPool, name: &str, sort_order: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO portfolio (name, sort_order) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(sort_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_host(pool, Arc::new(NullImageHost::new()))
}

pub fn create_test_state_with_host(pool: PgPool, image_host: Arc<dyn ImageHost>) -> AppState {
    let pool = Arc::new(pool);

    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let experience_repo = Arc::new(PgExperienceRepository::new(pool.clone()));
    let portfolio_repo = Arc::new(PgPortfolioRepository::new(pool.clone()));

    AppState {
        post_service: Arc::new(PostService::new(post_repo, image_host.clone())),
        experience_service: Arc::new(ExperienceService::new(experience_repo)),
        portfolio_service: Arc::new(PortfolioService::new(portfolio_repo)),
        auth_service: Arc::new(AuthService::new(TEST_PASSWORD.to_string())),
        image_host,
        site: SiteMeta {
            owner: "Test Owner".to_string(),
            location: Some("Testville, TS".to_string()),
            contact_email: Some("owner@example.com".to_string()),
        },
    }
}
