//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, image host wiring, and the Axum
//! server lifecycle.

use crate::application::services::{
    AuthService, ExperienceService, PortfolioService, PostService,
};
use crate::config::Config;
use crate::infrastructure::media::{HttpImageHost, ImageHost, NullImageHost};
use crate::infrastructure::persistence::{
    PgExperienceRepository, PgPortfolioRepository, PgPostRepository,
};
use crate::routes::app_router;
use crate::state::{AppState, SiteMeta};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Image host client (or NullImageHost fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let image_host: Arc<dyn ImageHost> = if let Some(media) = &config.media {
        match HttpImageHost::new(media.clone()) {
            Ok(host) => Arc::new(host),
            Err(e) => {
                tracing::warn!("Failed to configure image host: {}. Uploads disabled.", e);
                Arc::new(NullImageHost::new())
            }
        }
    } else {
        tracing::info!("Image host disabled (uploads unavailable)");
        Arc::new(NullImageHost::new())
    };

    let pool = Arc::new(pool);
    let post_repository = Arc::new(PgPostRepository::new(pool.clone()));
    let experience_repository = Arc::new(PgExperienceRepository::new(pool.clone()));
    let portfolio_repository = Arc::new(PgPortfolioRepository::new(pool.clone()));

    let state = AppState {
        post_service: Arc::new(PostService::new(post_repository, image_host.clone())),
        experience_service: Arc::new(ExperienceService::new(experience_repository)),
        portfolio_service: Arc::new(PortfolioService::new(portfolio_repository)),
        auth_service: Arc::new(AuthService::new(config.admin_password.clone())),
        image_host,
        site: SiteMeta {
            owner: config.site_owner.clone(),
            location: config.site_location.clone(),
            contact_email: config.site_contact_email.clone(),
        },
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        // A failed handler install must not trigger a shutdown.
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
