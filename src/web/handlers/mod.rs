//! HTML template rendering handlers for the public site and admin panel.

mod admin;
mod blog;
mod home;
mod login;
mod resume;

pub use admin::admin_handler;
pub use blog::{blog_list_handler, blog_post_handler};
pub use home::home_handler;
pub use login::login_page_handler;
pub use resume::resume_handler;
