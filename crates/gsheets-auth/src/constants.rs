//! Google OAuth constants
//!
//! Endpoint and grant-type values for the service-account JWT-bearer flow.
//! None of these are secrets — the secret material lives in the key file.

/// OAuth scope granting read/write access to spreadsheets
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Grant type for the service-account JWT-bearer exchange (RFC 7523)
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Token endpoint used when the key file omits `token_uri`
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Assertion lifetime in seconds (Google caps assertions at one hour)
pub const ASSERTION_TTL_SECS: u64 = 3600;

/// Default key file location relative to the working directory
pub const DEFAULT_CREDENTIALS_FILE: &str = "service_account_credentials.json";
