//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements. Queries are checked at runtime; the mapped entities derive
//! [`sqlx::FromRow`] and match the migration schema column for column.
//!
//! # Repositories
//!
//! - [`PgPostRepository`] - Blog post storage and retrieval
//! - [`PgExperienceRepository`] - Work history entries
//! - [`PgPortfolioRepository`] - Portfolio items

pub mod pg_experience_repository;
pub mod pg_portfolio_repository;
pub mod pg_post_repository;

pub use pg_experience_repository::PgExperienceRepository;
pub use pg_portfolio_repository::PgPortfolioRepository;
pub use pg_post_repository::PgPostRepository;
