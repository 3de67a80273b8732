//! Google service-account authentication library
//!
//! Loads a service-account key file and exchanges a signed JWT assertion for
//! an access token usable against Google APIs. This crate is a standalone
//! library with no dependency on the reader binary — it can be tested and
//! used independently.
//!
//! Credential flow:
//! 1. `credentials::ServiceAccountKey::load()` reads the key file from disk
//! 2. `token::fetch_token()` signs an RS256 assertion and POSTs it to the
//!    key's token endpoint
//! 3. The returned access token authorizes Sheets API calls for its lifetime
//!    (no refresh: the reader issues one read per run)
//!
//! `authenticate()` composes the two steps; a missing key file short-circuits
//! before any network call is made.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod token;

use std::path::Path;

pub use constants::*;
pub use credentials::ServiceAccountKey;
pub use error::{Error, Result};
pub use token::{TokenResponse, fetch_token};

/// Load the service-account key at `credential_path` and exchange it for an
/// access token scoped to `scopes`.
///
/// Exactly one token-endpoint attempt. If the key file does not exist the
/// error is `MissingCredential` and no network call happens.
pub async fn authenticate(
    client: &reqwest::Client,
    credential_path: &Path,
    scopes: &[&str],
) -> Result<TokenResponse> {
    let key = ServiceAccountKey::load(credential_path).await?;
    fetch_token(client, &key, scopes).await
}
