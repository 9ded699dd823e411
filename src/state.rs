//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, ExperienceService, PortfolioService, PostService,
};
use crate::infrastructure::media::ImageHost;
use crate::infrastructure::persistence::{
    PgExperienceRepository, PgPortfolioRepository, PgPostRepository,
};

/// Site identity rendered on the public pages.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub owner: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
}

/// Application state shared across all routes.
///
/// Services are concrete over the Postgres repositories; only the image host
/// stays dynamic because it is swapped for a no-op when unconfigured.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<PgPostRepository>>,
    pub experience_service: Arc<ExperienceService<PgExperienceRepository>>,
    pub portfolio_service: Arc<PortfolioService<PgPortfolioRepository>>,
    pub auth_service: Arc<AuthService>,
    pub image_host: Arc<dyn ImageHost>,
    pub site: SiteMeta,
}
