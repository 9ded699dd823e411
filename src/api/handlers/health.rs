//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts rows in the posts table
/// 2. **Media**: Reports whether an image host is configured (a site running
///    without one is still healthy, uploads just fail with a clear error)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": {
///       "status": "ok",
///       "message": "Connected, 12 posts"
///     },
///     "media": {
///       "status": "ok",
///       "message": "Image host configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let media_check = check_media(&state);

    let all_healthy = db_check.status == "ok" && media_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            media: media_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting posts.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.post_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} posts", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Reports whether the external image host is configured.
fn check_media(state: &AppState) -> CheckStatus {
    if state.image_host.is_enabled() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Image host configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Image host not configured, uploads disabled".to_string()),
        }
    }
}
