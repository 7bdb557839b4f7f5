//! Error types for the MLB Stats API client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

/// Failures that prevent producing an [`ApiResponse`](crate::ApiResponse) at all.
///
/// HTTP error statuses are deliberately *not* represented here: a 404 or 500
/// from the API comes back as an ordinary response value with that status.
/// Only transport failures with no response and undecodable bodies surface
/// as errors.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
