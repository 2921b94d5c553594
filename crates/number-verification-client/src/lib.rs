//! CAMARA Number Verification API client.

mod client;
mod error;
mod types;

pub use client::NumberVerificationClient;
pub use error::NumberVerificationError;
pub use types::*;
