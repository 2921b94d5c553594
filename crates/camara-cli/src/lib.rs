//! Command-line clients for CAMARA telecom APIs.
//!
//! Two programs share this crate:
//! - `camara-number-verification` checks a phone number against the device
//!   holding the access token, or asks for that device's number
//! - `camara-roaming-manager` reads roaming status and manages device status
//!   subscriptions

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{NumberVerificationCli, RoamingCli, Summary};
pub use config::{CommonConfig, NumberVerificationConfig, RoamingConfig};
pub use error::{AppError, AppResult};
