//! API route configuration.
//!
//! Every endpoint except login requires the admin session cookie via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_experience_handler, create_portfolio_handler, create_post_handler,
    delete_experience_handler, delete_portfolio_handler, delete_post_handler, list_experience_handler,
    list_portfolio_handler, list_posts_handler, login_handler, update_experience_handler,
    update_portfolio_handler, update_post_handler, upload_image_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without the admin cookie.
///
/// # Endpoints
///
/// - `POST /login` - Verify the shared secret and set the admin cookie
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_handler))
}

/// Content management routes, protected by the admin cookie.
///
/// # Endpoints
///
/// - `GET    /posts`        - List every post, drafts included
/// - `POST   /posts`        - Create a post
/// - `PUT    /posts`        - Overwrite a post (id in the body)
/// - `DELETE /posts?id=`    - Delete a post and its hosted cover image
/// - `GET    /experience`   - List experience entries
/// - `POST   /experience`   - Create an experience entry
/// - `PUT    /experience`   - Overwrite an experience entry (id in the body)
/// - `DELETE /experience?id=` - Delete an experience entry
/// - `GET    /portfolio`    - List portfolio items
/// - `POST   /portfolio`    - Create a portfolio item
/// - `PUT    /portfolio`    - Overwrite a portfolio item (id in the body)
/// - `DELETE /portfolio?id=` - Delete a portfolio item
/// - `POST   /upload-image` - Upload an image to the external host
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts_handler)
                .post(create_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/experience",
            get(list_experience_handler)
                .post(create_experience_handler)
                .put(update_experience_handler)
                .delete(delete_experience_handler),
        )
        .route(
            "/portfolio",
            get(list_portfolio_handler)
                .post(create_portfolio_handler)
                .put(update_portfolio_handler)
                .delete(delete_portfolio_handler),
        )
        .route("/upload-image", post(upload_image_handler))
}
