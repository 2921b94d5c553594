//! `camara-number-verification` flags.

use super::{present, print_json, Summary};
use clap::Parser;
use number_verification_client::{hash_phone_number, NumberVerificationClient};
use std::io::Write;
use tracing::info;

/// CAMARA Number Verification API Client
#[derive(Parser, Debug)]
#[command(name = "camara-number-verification", version, about)]
pub struct NumberVerificationCli {
    /// Verify the phone number
    #[arg(long, value_name = "PHONE")]
    pub verify: Option<String>,

    /// Send the number given to --verify as a SHA-256 hash
    #[arg(long, requires = "verify")]
    pub hashed: bool,

    /// Get the device phone number associated with the token
    #[arg(long = "get-number")]
    pub get_number: bool,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl NumberVerificationCli {
    /// Run the requested operations in order: verify, then get-number.
    /// An empty `--verify` value is ignored.
    pub async fn dispatch<W: Write>(
        &self,
        client: &NumberVerificationClient,
        out: &mut W,
    ) -> Summary {
        let mut summary = Summary::default();

        if let Some(phone_number) = present(&self.verify) {
            let result = if self.hashed {
                info!("Verifying hashed phone number");
                client
                    .verify_hashed_phone_number(&hash_phone_number(phone_number))
                    .await
            } else {
                info!("Verifying phone number: {}", phone_number);
                client.verify_phone_number(phone_number).await
            };
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        if self.get_number {
            info!("Getting device phone number");
            let result = client.get_device_phone_number().await;
            summary.record(
                result
                    .map_err(Into::into)
                    .and_then(|value| print_json(out, &value, self.pretty)),
            );
        }

        summary
    }
}
