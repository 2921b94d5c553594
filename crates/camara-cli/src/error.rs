//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("Number verification error: {0}")]
    NumberVerification(#[from] number_verification_client::NumberVerificationError),

    #[error("Device status error: {0}")]
    DeviceStatus(#[from] device_status_client::DeviceStatusError),

    #[error("Both subscription_detail and webhook are required for creating a subscription.")]
    MissingSubscriptionArguments,

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Output encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
