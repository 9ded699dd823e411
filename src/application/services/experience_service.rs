//! Work history management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{ExperienceEntry, ExperienceUpdate, NewExperienceEntry};
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;
use crate::utils::text;

/// Raw admin payload for creating or replacing an experience entry.
#[derive(Debug, Clone, Default)]
pub struct ExperienceInput {
    pub name: String,
    pub role: String,
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// Service for managing the work history shown on the home page.
pub struct ExperienceService<R: ExperienceRepository> {
    repository: Arc<R>,
}

impl<R: ExperienceRepository> ExperienceService<R> {
    /// Creates a new experience service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an entry from an admin payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if name or role is blank.
    pub async fn create(&self, input: ExperienceInput) -> Result<ExperienceEntry, AppError> {
        let input = normalize(input)?;

        self.repository
            .create(NewExperienceEntry {
                name: input.name,
                role: input.role,
                status_tag: input.status_tag,
                years: input.years,
                blurb: input.blurb,
                link: input.link,
                icon_url: input.icon_url,
                sort_order: input.sort_order.unwrap_or(0),
            })
            .await
    }

    /// Replaces an existing entry with an admin payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist, plus the same
    /// validation errors as [`Self::create`].
    pub async fn update(&self, id: i64, input: ExperienceInput) -> Result<ExperienceEntry, AppError> {
        let input = normalize(input)?;

        self.repository
            .update(
                id,
                ExperienceUpdate {
                    name: input.name,
                    role: input.role,
                    status_tag: input.status_tag,
                    years: input.years,
                    blurb: input.blurb,
                    link: input.link,
                    icon_url: input.icon_url,
                    sort_order: input.sort_order.unwrap_or(0),
                },
            )
            .await
    }

    /// Deletes an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Experience entry not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Lists all entries in display order.
    pub async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        self.repository.list().await
    }

    /// Counts all entries.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Trims every text field, drops blank optionals, and validates the
/// required ones.
fn normalize(mut input: ExperienceInput) -> Result<ExperienceInput, AppError> {
    input.name = text::clean(&input.name);
    input.role = text::clean(&input.role);
    input.status_tag = text::clean_optional(input.status_tag);
    input.years = text::clean_optional(input.years);
    input.blurb = text::clean_optional(input.blurb);
    input.link = text::clean_optional(input.link);
    input.icon_url = text::clean_optional(input.icon_url);

    if input.name.is_empty() || input.role.is_empty() {
        return Err(AppError::bad_request(
            "Name and role are required",
            json!({
                "name_present": !input.name.is_empty(),
                "role_present": !input.role.is_empty(),
            }),
        ));
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockExperienceRepository;
    use chrono::Utc;

    fn sample_entry(id: i64) -> ExperienceEntry {
        let now = Utc::now();
        ExperienceEntry {
            id,
            name: "Acme".to_string(),
            role: "Engineer".to_string(),
            status_tag: None,
            years: None,
            blurb: None,
            link: None,
            icon_url: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let mut repo = MockExperienceRepository::new();

        repo.expect_create()
            .withf(|entry| {
                entry.name == "Acme" && entry.role == "Engineer" && entry.years.is_none()
            })
            .times(1)
            .returning(|_| Ok(sample_entry(1)));

        let svc = ExperienceService::new(Arc::new(repo));

        let result = svc
            .create(ExperienceInput {
                name: " Acme ".to_string(),
                role: " Engineer ".to_string(),
                years: Some("  ".to_string()),
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_requires_name_and_role() {
        let mut repo = MockExperienceRepository::new();
        repo.expect_create().times(0);

        let svc = ExperienceService::new(Arc::new(repo));

        let result = svc
            .create(ExperienceInput {
                name: "Acme".to_string(),
                role: String::new(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_entry_is_not_found() {
        let mut repo = MockExperienceRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let svc = ExperienceService::new(Arc::new(repo));

        let result = svc.delete(42).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_defaults_sort_order() {
        let mut repo = MockExperienceRepository::new();

        repo.expect_update()
            .withf(|id, update| *id == 5 && update.sort_order == 0)
            .times(1)
            .returning(|_, _| Ok(sample_entry(5)));

        let svc = ExperienceService::new(Arc::new(repo));

        let result = svc
            .update(
                5,
                ExperienceInput {
                    name: "Acme".to_string(),
                    role: "Engineer".to_string(),
                    sort_order: None,
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
    }
}
