//! Utility functions for input validation and text normalization.
//!
//! This module provides helper functions used across the application:
//!
//! - [`slug`] - Post slug validation
//! - [`text`] - Whitespace trimming and blank-to-`NULL` normalization

pub mod slug;
pub mod text;
