//! Web-specific middleware for browser-facing routes.

pub mod web_auth;
