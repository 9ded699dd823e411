//! Handlers for blog post management endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::params::DeleteParams;
use crate::api::dto::posts::{CreatePostRequest, PostItem, PostListResponse, UpdatePostRequest};
use crate::application::services::PostInput;
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;

fn post_to_item(p: Post) -> PostItem {
    PostItem {
        id: p.id,
        title: p.title,
        slug: p.slug,
        subtitle: p.subtitle,
        cover_image_url: p.cover_image_url,
        body_html: p.body_html,
        published: p.published,
        published_at: p.published_at,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

/// Lists every post, drafts included, newest first.
///
/// # Endpoint
///
/// `GET /api/admin/posts`
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = state.post_service.list_for_admin().await?;

    Ok(Json(PostListResponse {
        items: posts.into_iter().map(post_to_item).collect(),
    }))
}

/// Creates a new post.
///
/// # Endpoint
///
/// `POST /api/admin/posts`
///
/// String fields are trimmed; a publish without an explicit timestamp is
/// stamped with the current time.
///
/// # Errors
///
/// Returns 400 if title or slug is blank, or the slug is malformed.
/// Returns 409 if the slug is already taken.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostItem>), AppError> {
    let input = PostInput {
        title: payload.title,
        slug: payload.slug,
        subtitle: payload.subtitle,
        cover_image_url: payload.cover_image_url,
        body_html: payload.body_html,
        published: payload.published,
        published_at: payload.published_at,
    };

    let post = state.post_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(post_to_item(post))))
}

/// Overwrites an existing post.
///
/// # Endpoint
///
/// `PUT /api/admin/posts`
///
/// The body carries the row id alongside the full set of mutable fields.
/// Publishing without an explicit timestamp keeps the stored `published_at`
/// or stamps the current time; unpublishing clears it.
///
/// # Errors
///
/// Returns 400 if the id is absent or title/slug is blank.
/// Returns 404 if no post matches the id.
/// Returns 409 if the new slug collides with another post.
pub async fn update_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostItem>, AppError> {
    let id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Missing id", json!({ "field": "id" })))?;

    let input = PostInput {
        title: payload.title,
        slug: payload.slug,
        subtitle: payload.subtitle,
        cover_image_url: payload.cover_image_url,
        body_html: payload.body_html,
        published: payload.published,
        published_at: payload.published_at,
    };

    let post = state.post_service.update(id, input).await?;

    Ok(Json(post_to_item(post)))
}

/// Deletes a post and, best effort, its hosted cover image.
///
/// # Endpoint
///
/// `DELETE /api/admin/posts?id=123`
///
/// The cover image is removed from the external host first; a host failure
/// is logged and the row deletion proceeds regardless.
///
/// # Errors
///
/// Returns 400 if the `id` parameter is absent.
/// Returns 404 if no post matches the id.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, AppError> {
    let id = params.require_id()?;

    state.post_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
