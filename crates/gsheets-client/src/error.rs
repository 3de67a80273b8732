//! Error types for Sheets API calls

/// Errors from a `values.get` call.
///
/// `Api` is a protocol-level rejection (permission denied, invalid range,
/// expired token) with the status and message Google returned. `Http` is a
/// transport failure where no response arrived at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Sheets API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result alias for Sheets API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = Error::Api {
            status: 403,
            message: "The caller does not have permission".into(),
        };
        let display = err.to_string();
        assert!(display.contains("403"), "got: {display}");
        assert!(display.contains("does not have permission"), "got: {display}");
    }
}
