//! Core utilities for the MLB Stats API client
//!
//! This module consolidates common utilities that are used across
//! the crate:
//! - `fields`: field-filter serialization for `fields=` query parameters
//! - `http`: shared HTTP client and headers

pub mod fields;
pub mod http;

// Re-export commonly used items for convenience
pub use fields::FieldFilter;
pub use http::{common_headers, CLIENT};
