//! Device Status API types.
//!
//! Subscription details, webhooks and every response body are opaque JSON;
//! only the request envelopes are typed.

use serde::Serialize;
use serde_json::Value;

/// Body of a `POST /roaming` request.
#[derive(Debug, Clone, Serialize)]
pub struct RoamingStatusRequest {
    pub device: Device,
}

/// Device identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub phone_number: String,
}

impl RoamingStatusRequest {
    pub fn for_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            device: Device {
                phone_number: phone_number.into(),
            },
        }
    }
}

/// Body of a `POST /subscriptions` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub subscription_detail: Value,
    pub webhook: Value,
}
