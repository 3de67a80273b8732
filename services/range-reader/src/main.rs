//! Google Sheets range reader
//!
//! Single-binary utility that:
//! 1. Loads a service-account key file from disk
//! 2. Exchanges it for an access token scoped to spreadsheets
//! 3. Fetches one configured cell range
//! 4. Prints the resulting rows to stdout
//!
//! Authentication gates the read: without a client handle the read step is
//! skipped entirely. Every expected failure (missing key file, rejected
//! credentials, transport or API errors) is reported as a diagnostic and the
//! process still exits cleanly; only an unusable configuration aborts.

mod config;
mod reader;

use anyhow::{Context, Result};
use gsheets_auth::SPREADSHEETS_SCOPE;
use gsheets_client::SheetsClient;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::reader::ReadOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with LOG_LEVEL / RUST_LOG support; plain fmt output
    // since this is an interactive console utility
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting gsheets-range-reader");

    // CLI: simple --config flag parsing
    let args: Vec<String> = std::env::args().collect();
    let cli_config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str());

    let config_path = Config::resolve_path(cli_config_path);
    info!(path = %config_path.display(), "loading configuration");

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    info!(
        spreadsheet_id = %config.spreadsheet.spreadsheet_id,
        range_name = %config.spreadsheet.range_name,
        credentials_path = %config.auth.credentials_path.display(),
        "configuration loaded"
    );

    let http = reqwest::Client::new();

    // Step 1: authenticate. Failures leave us without a client handle; the
    // read step observes that and skips the network entirely.
    let client = match gsheets_auth::authenticate(
        &http,
        &config.auth.credentials_path,
        &[SPREADSHEETS_SCOPE],
    )
    .await
    {
        Ok(token) => {
            info!(expires_in_secs = token.expires_in, "authentication succeeded");
            Some(SheetsClient::new(http.clone(), token.access_token))
        }
        Err(gsheets_auth::Error::MissingCredential(path)) => {
            error!(path = %path.display(), "credential file not found");
            warn!("to set up credentials:");
            warn!("  1. create a service account in the Google Cloud console");
            warn!("  2. create a JSON key for it and download the file");
            warn!(
                "  3. place the file at {} (or point GOOGLE_APPLICATION_CREDENTIALS at it)",
                path.display()
            );
            warn!("  4. share the spreadsheet with the service account's email address");
            None
        }
        Err(e) => {
            error!(error = %e, "authentication failed");
            None
        }
    };

    // Step 2: read the configured range once and print it.
    let outcome = reader::read_range(
        client.as_ref(),
        &config.spreadsheet.spreadsheet_id,
        &config.spreadsheet.range_name,
    )
    .await;

    match outcome {
        ReadOutcome::Rows(rows) => info!(rows = rows.len(), "done"),
        ReadOutcome::Empty => info!("done, range was empty"),
        ReadOutcome::Absent => warn!("finished without a result"),
    }

    Ok(())
}
