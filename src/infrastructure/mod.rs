//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and media storage.
//!
//! # Modules
//!
//! - [`media`] - External image host bridge (HTTP and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod media;
pub mod persistence;
