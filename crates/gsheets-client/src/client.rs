//! Authenticated Sheets API client

use common::Secret;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::values::{RangeValues, ValueRange};

/// Production API host. Tests point `base_url` at a local mock instead.
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Handle for issuing `values.get` calls with a bearer token.
///
/// Stateless between calls and valid for the token's lifetime; the reader
/// performs one read per run, so no refresh or teardown exists.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Secret<String>,
}

/// Error envelope Google wraps protocol failures in.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl SheetsClient {
    /// Build a client against the production API host.
    pub fn new(http: reqwest::Client, access_token: String) -> Self {
        Self::with_base_url(http, access_token, SHEETS_API_BASE)
    }

    /// Build a client against a custom host (used by tests).
    pub fn with_base_url(
        http: reqwest::Client,
        access_token: String,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            access_token: Secret::new(access_token),
        }
    }

    /// Fetch the values in `range` of `spreadsheet_id`.
    ///
    /// Exactly one GET; the range expression is passed through verbatim.
    /// A successful response with no `values` field is `RangeValues::Empty`,
    /// never an error.
    pub async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<RangeValues> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, spreadsheet_id, range
        );
        debug!(spreadsheet_id, range, "fetching range");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token.expose())
            .send()
            .await
            .map_err(|e| Error::Http(format!("values.get request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let value_range = response
            .json::<ValueRange>()
            .await
            .map_err(|e| Error::Decode(format!("values.get response: {e}")))?;

        Ok(value_range.into_range_values())
    }
}

/// Pull the human-readable message out of Google's error envelope, falling
/// back to the raw body when it isn't JSON.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            let message = parsed.error.message.unwrap_or_else(|| body.to_owned());
            match parsed.error.status {
                Some(status) => format!("{status}: {message}"),
                None => message,
            }
        }
        Err(_) => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Spawn a mock Sheets endpoint returning `status`/`body` for every
    /// `values.get` call. Returns the base URL and a request counter.
    async fn spawn_sheets_endpoint(
        status: StatusCode,
        body: &'static str,
    ) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();

        let app = axum::Router::new().route(
            "/v4/spreadsheets/{id}/values/{range}",
            axum::routing::get(
                move |Path((_id, _range)): Path<(String, String)>, headers: HeaderMap| {
                    let hits = hits_clone.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default();
                        assert!(auth.starts_with("Bearer "), "missing bearer token: {auth}");
                        (status, body)
                    }
                },
            ),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), hits)
    }

    fn client(base_url: &str) -> SheetsClient {
        SheetsClient::with_base_url(reqwest::Client::new(), "ya29.test".into(), base_url)
    }

    #[tokio::test]
    async fn get_values_returns_rows_in_sheet_order() {
        let (base, hits) = spawn_sheets_endpoint(
            StatusCode::OK,
            r#"{"range":"Sheet1!A1:D","majorDimension":"ROWS","values":[["a","b"],["c","d"]]}"#,
        )
        .await;

        let result = client(&base)
            .get_values("sheet-1", "Sheet1!A1:D")
            .await
            .unwrap();
        assert_eq!(
            result,
            RangeValues::Rows(vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ])
        );
        assert_eq!(result.row_count(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1, "exactly one fetch");
    }

    #[tokio::test]
    async fn get_values_empty_range_is_empty_not_error() {
        let (base, _hits) =
            spawn_sheets_endpoint(StatusCode::OK, r#"{"range":"Sheet1!A1:D"}"#).await;

        let result = client(&base)
            .get_values("sheet-1", "Sheet1!A1:D")
            .await
            .unwrap();
        assert_eq!(result, RangeValues::Empty);
    }

    #[tokio::test]
    async fn get_values_permission_denied_is_api_error() {
        let (base, hits) = spawn_sheets_endpoint(
            StatusCode::FORBIDDEN,
            r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#,
        )
        .await;

        let err = client(&base)
            .get_values("sheet-1", "Sheet1!A1:D")
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("PERMISSION_DENIED"), "got: {message}");
                assert!(message.contains("does not have permission"), "got: {message}");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        // One attempt, no retry
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_values_invalid_range_is_api_error() {
        let (base, _hits) = spawn_sheets_endpoint(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"code":400,"message":"Unable to parse range: Nope!A1:D","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;

        let err = client(&base)
            .get_values("sheet-1", "Nope!A1:D")
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Api { status: 400, ref message } if message.contains("Unable to parse range")),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn get_values_non_json_error_body_is_preserved() {
        let (base, _hits) =
            spawn_sheets_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").await;

        let err = client(&base)
            .get_values("sheet-1", "Sheet1!A1:D")
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Api { status: 500, ref message } if message == "upstream exploded"),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn get_values_unreachable_host_is_http_error() {
        let err = client("http://127.0.0.1:1")
            .get_values("sheet-1", "Sheet1!A1:D")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn repeated_reads_are_idempotent() {
        let (base, hits) = spawn_sheets_endpoint(
            StatusCode::OK,
            r#"{"values":[["a","b"],["c","d"]]}"#,
        )
        .await;

        let client = client(&base);
        let first = client.get_values("sheet-1", "Sheet1!A1:D").await.unwrap();
        let second = client.get_values("sheet-1", "Sheet1!A1:D").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
