//! Handlers for experience entry management endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::experience::{
    CreateExperienceRequest, ExperienceItem, ExperienceListResponse, UpdateExperienceRequest,
};
use crate::api::dto::params::DeleteParams;
use crate::application::services::ExperienceInput;
use crate::domain::entities::ExperienceEntry;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;

fn entry_to_item(e: ExperienceEntry) -> ExperienceItem {
    ExperienceItem {
        id: e.id,
        name: e.name,
        role: e.role,
        status_tag: e.status_tag,
        years: e.years,
        blurb: e.blurb,
        link: e.link,
        icon_url: e.icon_url,
        sort_order: e.sort_order,
        created_at: e.created_at,
        updated_at: e.updated_at,
    }
}

/// Lists all experience entries in display order.
///
/// # Endpoint
///
/// `GET /api/admin/experience`
pub async fn list_experience_handler(
    State(state): State<AppState>,
) -> Result<Json<ExperienceListResponse>, AppError> {
    let entries = state.experience_service.list().await?;

    Ok(Json(ExperienceListResponse {
        items: entries.into_iter().map(entry_to_item).collect(),
    }))
}

/// Creates a new experience entry.
///
/// # Endpoint
///
/// `POST /api/admin/experience`
///
/// # Errors
///
/// Returns 400 if name or role is blank.
pub async fn create_experience_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateExperienceRequest>,
) -> Result<(StatusCode, Json<ExperienceItem>), AppError> {
    let input = ExperienceInput {
        name: payload.name,
        role: payload.role,
        status_tag: payload.status_tag,
        years: payload.years,
        blurb: payload.blurb,
        link: payload.link,
        icon_url: payload.icon_url,
        sort_order: payload.sort_order,
    };

    let entry = state.experience_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(entry_to_item(entry))))
}

/// Overwrites an existing experience entry.
///
/// # Endpoint
///
/// `PUT /api/admin/experience`
///
/// # Errors
///
/// Returns 400 if the id is absent or name/role is blank.
/// Returns 404 if no entry matches the id.
pub async fn update_experience_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateExperienceRequest>,
) -> Result<Json<ExperienceItem>, AppError> {
    let id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Missing id", json!({ "field": "id" })))?;

    let input = ExperienceInput {
        name: payload.name,
        role: payload.role,
        status_tag: payload.status_tag,
        years: payload.years,
        blurb: payload.blurb,
        link: payload.link,
        icon_url: payload.icon_url,
        sort_order: payload.sort_order,
    };

    let entry = state.experience_service.update(id, input).await?;

    Ok(Json(entry_to_item(entry)))
}

/// Deletes an experience entry.
///
/// # Endpoint
///
/// `DELETE /api/admin/experience?id=123`
///
/// # Errors
///
/// Returns 400 if the `id` parameter is absent.
/// Returns 404 if no entry matches the id.
pub async fn delete_experience_handler(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, AppError> {
    let id = params.require_id()?;

    state.experience_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
