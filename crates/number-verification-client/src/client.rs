//! Number Verification HTTP client.

use crate::error::NumberVerificationError;
use crate::types::*;
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Rendered in place of a missing token so the header is still sent.
const MISSING_TOKEN: &str = "None";

/// CAMARA Number Verification API client.
///
/// The access token is stored using `SecretString` so it never shows up
/// in logs or debug output.
#[derive(Clone)]
pub struct NumberVerificationClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl NumberVerificationClient {
    /// Create a new client.
    ///
    /// Without a `timeout` a request may wait indefinitely on a silent server.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NumberVerificationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(SecretString::new),
        })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the phone number belongs to the device holding the token.
    #[instrument(skip(self))]
    pub async fn verify_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Value, NumberVerificationError> {
        self.verify(&VerifyRequest::plain(phone_number)).await
    }

    /// Same as [`verify_phone_number`](Self::verify_phone_number) but with a
    /// hashed number, see [`hash_phone_number`].
    #[instrument(skip(self))]
    pub async fn verify_hashed_phone_number(
        &self,
        hashed_phone_number: &str,
    ) -> Result<Value, NumberVerificationError> {
        self.verify(&VerifyRequest::hashed(hashed_phone_number)).await
    }

    /// Ask the network for the phone number of the device holding the token.
    #[instrument(skip(self))]
    pub async fn get_device_phone_number(&self) -> Result<Value, NumberVerificationError> {
        let response = self
            .request(Method::GET, "/device-phone-number")
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn verify(&self, request: &VerifyRequest) -> Result<Value, NumberVerificationError> {
        let response = self
            .request(Method::POST, "/verify")
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Build a request with the auth and content headers every call carries.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let token = self
            .token
            .as_ref()
            .map(|t| t.expose_secret().as_str())
            .unwrap_or(MISSING_TOKEN);

        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
    }

    /// Decode the response body whatever the status; API errors come back
    /// as JSON bodies too.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Value, NumberVerificationError> {
        let status = response.status();
        if !status.is_success() {
            warn!("Number verification API returned {}", status);
        }

        let body = response.text().await?;
        debug!(
            "Response body: {}",
            body.chars().take(200).collect::<String>()
        );

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(NumberVerificationError::from)
    }
}
