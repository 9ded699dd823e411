//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; input
//! normalization and validation live in the application services.

pub mod experience;
pub mod health;
pub mod login;
pub mod params;
pub mod portfolio;
pub mod posts;
pub mod upload;
