//! CAMARA roaming / device status client - entry point.

use camara_cli::logging::init_logging;
use camara_cli::{AppResult, RoamingCli, RoamingConfig, Summary};
use clap::Parser;
use device_status_client::DeviceStatusClient;
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = RoamingCli::parse();

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

async fn run(cli: RoamingCli) -> AppResult<Summary> {
    // Load configuration
    let config = RoamingConfig::load()?;

    // Initialize logging
    init_logging(&config.common.log_level);

    let client = DeviceStatusClient::new(
        &config.camara_api_base_url,
        config.common.token(),
        config.common.request_timeout,
    )?;
    debug!("Device status endpoint: {}", client.base_url());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Ok(cli.dispatch(&client, &mut out).await)
}
