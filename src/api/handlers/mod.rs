//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod experience;
pub mod health;
pub mod login;
pub mod portfolio;
pub mod posts;
pub mod upload;

pub use experience::{
    create_experience_handler, delete_experience_handler, list_experience_handler,
    update_experience_handler,
};
pub use health::health_handler;
pub use login::login_handler;
pub use portfolio::{
    create_portfolio_handler, delete_portfolio_handler, list_portfolio_handler,
    update_portfolio_handler,
};
pub use posts::{create_post_handler, delete_post_handler, list_posts_handler, update_post_handler};
pub use upload::upload_image_handler;
