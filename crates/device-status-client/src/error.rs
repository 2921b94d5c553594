//! Device status client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceStatusError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
