//! Error types for service-account authentication

use std::path::PathBuf;

/// Errors from credential loading and token exchange.
///
/// `MissingCredential` is the expected cold-start condition (no key file has
/// been placed yet) and is kept distinct from `CredentialParse` so the caller
/// can print remediation steps instead of a parse diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("credential file not found at {}", .0.display())]
    MissingCredential(PathBuf),

    #[error("credential parse error: {0}")]
    CredentialParse(String),

    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
