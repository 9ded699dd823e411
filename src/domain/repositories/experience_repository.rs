//! Repository trait for resume experience entries.

use crate::domain::entities::{ExperienceEntry, ExperienceUpdate, NewExperienceEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing experience entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgExperienceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Creates a new experience entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on database errors.
    async fn create(&self, entry: NewExperienceEntry) -> Result<ExperienceEntry, AppError>;

    /// Replaces an existing entry with the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has the given id.
    async fn update(&self, id: i64, update: ExperienceUpdate) -> Result<ExperienceEntry, AppError>;

    /// Deletes an entry by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no entry matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists all entries ordered by `sort_order` ascending, then id.
    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError>;

    /// Counts all entries.
    async fn count(&self) -> Result<i64, AppError>;
}
