//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Blog post CRUD and image cleanup
//! - [`services::experience_service::ExperienceService`] - Resume timeline entries
//! - [`services::portfolio_service::PortfolioService`] - Home page project cards
//! - [`services::auth_service::AuthService`] - Admin password and session cookie

pub mod services;
