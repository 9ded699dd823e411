//! Handlers for portfolio item management endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::params::DeleteParams;
use crate::api::dto::portfolio::{
    CreatePortfolioRequest, PortfolioItemDto, PortfolioListResponse, UpdatePortfolioRequest,
};
use crate::application::services::PortfolioInput;
use crate::domain::entities::PortfolioItem;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;

fn item_to_dto(p: PortfolioItem) -> PortfolioItemDto {
    PortfolioItemDto {
        id: p.id,
        name: p.name,
        link: p.link,
        icon_url: p.icon_url,
        blurb: p.blurb,
        sort_order: p.sort_order,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

/// Lists all portfolio items in display order.
///
/// # Endpoint
///
/// `GET /api/admin/portfolio`
pub async fn list_portfolio_handler(
    State(state): State<AppState>,
) -> Result<Json<PortfolioListResponse>, AppError> {
    let items = state.portfolio_service.list().await?;

    Ok(Json(PortfolioListResponse {
        items: items.into_iter().map(item_to_dto).collect(),
    }))
}

/// Creates a new portfolio item.
///
/// # Endpoint
///
/// `POST /api/admin/portfolio`
///
/// # Errors
///
/// Returns 400 if name is blank.
pub async fn create_portfolio_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioItemDto>), AppError> {
    let input = PortfolioInput {
        name: payload.name,
        link: payload.link,
        icon_url: payload.icon_url,
        blurb: payload.blurb,
        sort_order: payload.sort_order,
    };

    let item = state.portfolio_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(item_to_dto(item))))
}

/// Overwrites an existing portfolio item.
///
/// # Endpoint
///
/// `PUT /api/admin/portfolio`
///
/// # Errors
///
/// Returns 400 if the id is absent or name is blank.
/// Returns 404 if no item matches the id.
pub async fn update_portfolio_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePortfolioRequest>,
) -> Result<Json<PortfolioItemDto>, AppError> {
    let id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Missing id", json!({ "field": "id" })))?;

    let input = PortfolioInput {
        name: payload.name,
        link: payload.link,
        icon_url: payload.icon_url,
        blurb: payload.blurb,
        sort_order: payload.sort_order,
    };

    let item = state.portfolio_service.update(id, input).await?;

    Ok(Json(item_to_dto(item)))
}

/// Deletes a portfolio item.
///
/// # Endpoint
///
/// `DELETE /api/admin/portfolio?id=123`
///
/// # Errors
///
/// Returns 400 if the `id` parameter is absent.
/// Returns 404 if no item matches the id.
pub async fn delete_portfolio_handler(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, AppError> {
    let id = params.require_id()?;

    state.portfolio_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
