//! `camara-roaming-manager` flags.

use super::{present, print_json, Summary};
use crate::error::AppError;
use clap::Parser;
use device_status_client::DeviceStatusClient;
use serde_json::Value;
use std::io::Write;
use tracing::{error, info};

/// CAMARA Device Status API Client
#[derive(Parser, Debug)]
#[command(name = "camara-roaming-manager", version, about)]
pub struct RoamingCli {
    /// Phone number to check roaming status for
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Create a new device status subscription
    #[arg(long)]
    pub create: bool,

    /// List all device status subscriptions
    #[arg(long)]
    pub list: bool,

    /// Retrieve a specific device status subscription
    #[arg(long, value_name = "ID")]
    pub retrieve: Option<String>,

    /// Delete a specific device status subscription
    #[arg(long, value_name = "ID")]
    pub delete: Option<String>,

    /// Subscription detail (JSON) for creating a subscription
    #[arg(long = "subscription_detail", value_name = "JSON", value_parser = parse_json)]
    pub subscription_detail: Option<Value>,

    /// Webhook information (JSON) for creating a subscription
    #[arg(long, value_name = "JSON", value_parser = parse_json)]
    pub webhook: Option<Value>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_json(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}

impl RoamingCli {
    /// Run the requested operations in order: phone, create, list, retrieve,
    /// delete.
    ///
    /// Empty values count as absent. `--create` without both of its payloads
    /// stops the dispatch before any request is sent.
    pub async fn dispatch<W: Write>(&self, client: &DeviceStatusClient, out: &mut W) -> Summary {
        let mut summary = Summary::default();

        let create_payload = match self.create_payload() {
            Ok(payload) => payload,
            Err(e) => {
                error!("{}", e);
                summary.failed += 1;
                return summary;
            }
        };

        if let Some(phone_number) = present(&self.phone) {
            info!("Getting roaming status for phone number: {}", phone_number);
            let result = client.get_current_roaming_status(phone_number).await;
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        if let Some((subscription_detail, webhook)) = create_payload {
            info!("Creating new device status subscription");
            let result = client
                .create_device_status_subscription(subscription_detail, webhook)
                .await;
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        if self.list {
            info!("Listing all device status subscriptions");
            let result = client.retrieve_subscription_list().await;
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        if let Some(subscription_id) = present(&self.retrieve) {
            info!("Retrieving subscription with ID: {}", subscription_id);
            let result = client.retrieve_subscription(subscription_id).await;
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        if let Some(subscription_id) = present(&self.delete) {
            info!("Deleting subscription with ID: {}", subscription_id);
            let result = client.delete_subscription(subscription_id).await;
            summary.record(result.map_err(Into::into).and_then(|deleted| {
                let message = if deleted {
                    "Subscription deleted successfully."
                } else {
                    "Failed to delete subscription."
                };
                writeln!(out, "{}", message).map_err(AppError::from)
            }));
        }

        summary
    }

    /// Payloads for `--create`, or `None` when no subscription is requested.
    fn create_payload(&self) -> Result<Option<(Value, Value)>, AppError> {
        if !self.create {
            return Ok(None);
        }
        match (&self.subscription_detail, &self.webhook) {
            (Some(detail), Some(webhook)) => Ok(Some((detail.clone(), webhook.clone()))),
            _ => Err(AppError::MissingSubscriptionArguments),
        }
    }
}
