//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Blog post CRUD plus the public read paths
//! - [`ExperienceRepository`] - Work history entries
//! - [`PortfolioRepository`] - Portfolio items

pub mod experience_repository;
pub mod portfolio_repository;
pub mod post_repository;

pub use experience_repository::ExperienceRepository;
pub use portfolio_repository::PortfolioRepository;
pub use post_repository::PostRepository;

#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
#[cfg(test)]
pub use portfolio_repository::MockPortfolioRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
