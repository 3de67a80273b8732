//! Range read gate and console output
//!
//! The second half of the two-step flow: given the client handle the
//! authenticator produced (or didn't), fetch the configured range once and
//! print it. Every failure is converted to a diagnostic and the `Absent`
//! outcome here; nothing propagates to the caller as an error.

use gsheets_client::{Error as ClientError, RangeValues, SheetsClient};
use tracing::{error, info, warn};

/// Terminal state of a run's read step.
///
/// `Empty` means the fetch succeeded and the range holds no data; `Absent`
/// means no result exists (no client, or the fetch failed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// At least one row, printed in sheet order
    Rows(Vec<Vec<String>>),
    /// Successful fetch, zero rows
    Empty,
    /// No client handle, or the fetch failed
    Absent,
}

/// Fetch `range_name` of `spreadsheet_id` and print the resulting rows.
///
/// With no client handle (authentication didn't produce one) this returns
/// `Absent` without any network call. Otherwise it issues exactly one fetch
/// and maps the result: rows are printed line by line with a count summary,
/// an empty range is reported as such, and any API or transport failure
/// becomes a diagnostic plus `Absent`.
pub async fn read_range(
    client: Option<&SheetsClient>,
    spreadsheet_id: &str,
    range_name: &str,
) -> ReadOutcome {
    let Some(client) = client else {
        warn!("no authenticated client, skipping range read");
        return ReadOutcome::Absent;
    };

    match client.get_values(spreadsheet_id, range_name).await {
        Ok(RangeValues::Rows(rows)) => {
            for row in &rows {
                println!("{}", row.join("\t"));
            }
            info!(spreadsheet_id, range_name, rows = rows.len(), "retrieved rows");
            ReadOutcome::Rows(rows)
        }
        Ok(RangeValues::Empty) => {
            info!(spreadsheet_id, range_name, "no data found in range");
            ReadOutcome::Empty
        }
        Err(ClientError::Api { status, message }) => {
            error!(spreadsheet_id, range_name, status, %message, "range read rejected");
            ReadOutcome::Absent
        }
        Err(e) => {
            error!(spreadsheet_id, range_name, error = %e, "range read failed");
            ReadOutcome::Absent
        }
    }
}
