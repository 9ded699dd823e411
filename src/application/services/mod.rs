//! Business logic services for the application layer.

pub mod auth_service;
pub mod experience_service;
pub mod portfolio_service;
pub mod post_service;

pub use auth_service::AuthService;
pub use experience_service::{ExperienceInput, ExperienceService};
pub use portfolio_service::{PortfolioInput, PortfolioService};
pub use post_service::{PostInput, PostService};
