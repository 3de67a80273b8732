//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults. The
//! credential path can come from GOOGLE_APPLICATION_CREDENTIALS so the
//! standard Google tooling convention keeps working; the key material itself
//! never appears in the TOML.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use gsheets_auth::DEFAULT_CREDENTIALS_FILE;

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub spreadsheet: SpreadsheetConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Target sheet and range
#[derive(Debug, Deserialize)]
pub struct SpreadsheetConfig {
    /// Spreadsheet identifier from the sheet's URL
    pub spreadsheet_id: String,
    /// A1-style range expression, passed to the API verbatim
    pub range_name: String,
}

/// Credential location
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Path to the service-account JSON key file
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from(DEFAULT_CREDENTIALS_FILE)
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment variables.
    ///
    /// Credential path resolution order:
    /// 1. GOOGLE_APPLICATION_CREDENTIALS env var
    /// 2. auth.credentials_path from config
    /// 3. `service_account_credentials.json` in the working directory
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        if config.spreadsheet.spreadsheet_id.trim().is_empty() {
            return Err(common::Error::Config(
                "spreadsheet_id must not be empty".into(),
            ));
        }

        if config.spreadsheet.range_name.trim().is_empty() {
            return Err(common::Error::Config("range_name must not be empty".into()));
        }

        if let Ok(env_path) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS") {
            if !env_path.trim().is_empty() {
                config.auth.credentials_path = PathBuf::from(env_path);
            }
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("range-reader.toml")
    }
}
