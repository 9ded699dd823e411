//! Portfolio item management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewPortfolioItem, PortfolioItem, PortfolioItemUpdate};
use crate::domain::repositories::PortfolioRepository;
use crate::error::AppError;
use crate::utils::text;

/// Raw admin payload for creating or replacing a portfolio item.
#[derive(Debug, Clone, Default)]
pub struct PortfolioInput {
    pub name: String,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub blurb: Option<String>,
    pub sort_order: Option<i32>,
}

/// Service for managing the project cards on the home page.
pub struct PortfolioService<R: PortfolioRepository> {
    repository: Arc<R>,
}

impl<R: PortfolioRepository> PortfolioService<R> {
    /// Creates a new portfolio service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an item from an admin payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    pub async fn create(&self, input: PortfolioInput) -> Result<PortfolioItem, AppError> {
        let input = normalize(input)?;

        self.repository
            .create(NewPortfolioItem {
                name: input.name,
                link: input.link,
                icon_url: input.icon_url,
                blurb: input.blurb,
                sort_order: input.sort_order.unwrap_or(0),
            })
            .await
    }

    /// Replaces an existing item with an admin payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist, plus the same
    /// validation errors as [`Self::create`].
    pub async fn update(&self, id: i64, input: PortfolioInput) -> Result<PortfolioItem, AppError> {
        let input = normalize(input)?;

        self.repository
            .update(
                id,
                PortfolioItemUpdate {
                    name: input.name,
                    link: input.link,
                    icon_url: input.icon_url,
                    blurb: input.blurb,
                    sort_order: input.sort_order.unwrap_or(0),
                },
            )
            .await
    }

    /// Deletes an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Portfolio item not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Lists all items in display order.
    pub async fn list(&self) -> Result<Vec<PortfolioItem>, AppError> {
        self.repository.list().await
    }

    /// Counts all items.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Trims every text field, drops blank optionals, and validates the name.
fn normalize(mut input: PortfolioInput) -> Result<PortfolioInput, AppError> {
    input.name = text::clean(&input.name);
    input.link = text::clean_optional(input.link);
    input.icon_url = text::clean_optional(input.icon_url);
    input.blurb = text::clean_optional(input.blurb);

    if input.name.is_empty() {
        return Err(AppError::bad_request("Name is required", json!({})));
    }

    Ok(input)
}
