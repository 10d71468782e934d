//! The single failure kind surfaced by the API client
//!
//! Callers get no status-code breakdown: a refused connection and a 500
//! both land here, and recovery is always "re-trigger the action".

use thiserror::Error;

/// Any transport failure or non-success HTTP status on an API call.
#[derive(Debug, Error)]
#[error("API request failed: {0}")]
pub struct ApiError(#[from] reqwest::Error);
