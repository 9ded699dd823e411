//! Repository trait for portfolio items.

use crate::domain::entities::{NewPortfolioItem, PortfolioItem, PortfolioItemUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing portfolio items.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPortfolioRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Creates a new portfolio item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on database errors.
    async fn create(&self, item: NewPortfolioItem) -> Result<PortfolioItem, AppError>;

    /// Replaces an existing item with the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has the given id.
    async fn update(&self, id: i64, update: PortfolioItemUpdate)
        -> Result<PortfolioItem, AppError>;

    /// Deletes an item by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no item matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists all items ordered by `sort_order` ascending, then id.
    async fn list(&self) -> Result<Vec<PortfolioItem>, AppError>;

    /// Counts all items.
    async fn count(&self) -> Result<i64, AppError>;
}
