//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the site. Entities are plain data structures without business
//! logic.
//!
//! # Entity Types
//!
//! - [`Post`] - A blog post, draft or published
//! - [`ExperienceEntry`] - A position in the work history
//! - [`PortfolioItem`] - A project card on the home page
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewPost`, `NewExperienceEntry`, `NewPortfolioItem` - For creating new records
//! - `PostUpdate`, `ExperienceUpdate`, `PortfolioItemUpdate` - Full replacement payloads
//!
//! Row entities derive [`sqlx::FromRow`] so repositories can map query results
//! directly.

pub mod experience;
pub mod portfolio;
pub mod post;

pub use experience::{ExperienceEntry, ExperienceUpdate, NewExperienceEntry};
pub use portfolio::{NewPortfolioItem, PortfolioItem, PortfolioItemUpdate};
pub use post::{NewPost, Post, PostUpdate};
