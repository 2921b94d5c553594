//! Number Verification API types.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Body of a `POST /verify` request.
///
/// The API accepts either the plain phone number or its SHA-256 digest,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerifyRequest {
    PhoneNumber(String),
    HashedPhoneNumber(String),
}

impl VerifyRequest {
    /// Verify a phone number sent as-is.
    pub fn plain(phone_number: impl Into<String>) -> Self {
        Self::PhoneNumber(phone_number.into())
    }

    /// Verify a phone number by its precomputed hash.
    pub fn hashed(hashed_phone_number: impl Into<String>) -> Self {
        Self::HashedPhoneNumber(hashed_phone_number.into())
    }
}

/// Hash a phone number the way the API expects for `hashedPhoneNumber`:
/// SHA-256 over the UTF-8 bytes, lowercase hex.
pub fn hash_phone_number(phone_number: &str) -> String {
    hex::encode(Sha256::digest(phone_number.as_bytes()))
}
