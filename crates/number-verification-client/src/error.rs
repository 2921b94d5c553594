//! Number verification client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumberVerificationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
