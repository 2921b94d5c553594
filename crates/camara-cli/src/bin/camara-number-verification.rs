//! CAMARA Number Verification client - entry point.

use camara_cli::logging::init_logging;
use camara_cli::{AppResult, NumberVerificationCli, NumberVerificationConfig, Summary};
use clap::Parser;
use number_verification_client::NumberVerificationClient;
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = NumberVerificationCli::parse();

    match run(cli).await {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            error!("{} operation(s) failed", summary.failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: NumberVerificationCli) -> AppResult<Summary> {
    // Load configuration
    let config = NumberVerificationConfig::load()?;

    // Initialize logging
    init_logging(&config.common.log_level);

    let client = NumberVerificationClient::new(
        &config.api_base_url,
        config.common.token(),
        config.common.request_timeout,
    )?;
    debug!("Number verification endpoint: {}", client.base_url());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Ok(cli.dispatch(&client, &mut out).await)
}
