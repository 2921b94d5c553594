//! CAMARA Device Status API client: roaming status and status-change
//! subscriptions.

mod client;
mod error;
mod types;

pub use client::DeviceStatusClient;
pub use error::DeviceStatusError;
pub use types::*;
