//! Web layer for the server-rendered site and admin panel.
//!
//! Provides the public HTML pages and the admin panel shell. Uses Askama
//! templates for server-side rendering; the admin panel mutates content via
//! the JSON API from `static/admin.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Web-specific middleware (cookie auth with redirect)
//! - [`routes`] - Page route configuration
//! - [`views`] - Display-ready view models for the templates

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
