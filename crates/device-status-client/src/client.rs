//! Device Status HTTP client.

use crate::error::DeviceStatusError;
use crate::types::*;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Rendered in place of a missing token so the header is still sent.
const MISSING_TOKEN: &str = "None";

/// CAMARA Device Status API client.
#[derive(Clone)]
pub struct DeviceStatusClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl DeviceStatusClient {
    /// Create a new client. No timeout is applied unless one is given.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DeviceStatusError> {
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

    /// Get the current roaming status of a device.
    #[instrument(skip(self))]
    pub async fn get_current_roaming_status(
        &self,
        phone_number: &str,
    ) -> Result<Value, DeviceStatusError> {
        let request = RoamingStatusRequest::for_phone_number(phone_number);

        let response = self
            .request(Method::POST, "/roaming")
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Register a webhook for device status notifications.
    #[instrument(skip_all)]
    pub async fn create_device_status_subscription(
        &self,
        subscription_detail: Value,
        webhook: Value,
    ) -> Result<Value, DeviceStatusError> {
        let request = CreateSubscriptionRequest {
            subscription_detail,
            webhook,
        };

        let response = self
            .request(Method::POST, "/subscriptions")
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List all subscriptions visible to the token.
    #[instrument(skip(self))]
    pub async fn retrieve_subscription_list(&self) -> Result<Value, DeviceStatusError> {
        let response = self.request(Method::GET, "/subscriptions").send().await?;
        self.handle_response(response).await
    }

    /// Get a single subscription.
    #[instrument(skip(self))]
    pub async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Value, DeviceStatusError> {
        let response = self
            .request(Method::GET, &format!("/subscriptions/{}", subscription_id))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a subscription. Only `204 No Content` counts as deleted.
    #[instrument(skip(self))]
    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<bool, DeviceStatusError> {
        let response = self
            .request(Method::DELETE, &format!("/subscriptions/{}", subscription_id))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            warn!("Delete of subscription {} returned {}", subscription_id, status);
        }
        Ok(status == StatusCode::NO_CONTENT)
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

    /// Decode the body whatever the status.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, DeviceStatusError> {
        let status = response.status();
        if !status.is_success() {
            warn!("Device status API returned {}", status);
        }

        let body = response.text().await?;
        debug!(
            "Response body: {}",
            body.chars().take(200).collect::<String>()
        );

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(DeviceStatusError::from)
    }
}
