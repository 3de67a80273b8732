//! Value range response model
//!
//! Wire shape of a `values.get` response and the crate's result type. The
//! API omits the `values` field entirely when the range has no data, so the
//! field defaults to an empty vec and `into_range_values` turns that into
//! the explicit `Empty` state.

use serde::Deserialize;

/// Wire representation of a `values.get` response.
///
/// Cells arrive as JSON values (formatted cells are strings, but untyped
/// renders can carry numbers and booleans); conversion to the string rows
/// the caller sees happens in [`ValueRange::into_range_values`].
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(rename = "majorDimension", default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Result of a successful read: the rows in sheet order, or nothing.
///
/// `Empty` is a successful call that yielded zero rows. It is deliberately
/// distinct from the error path so callers can tell "the range is blank"
/// from "the request failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeValues {
    /// At least one row, top-to-bottom sheet order preserved
    Rows(Vec<Vec<String>>),
    /// The call succeeded but the range holds no data
    Empty,
}

impl RangeValues {
    /// Number of rows (zero for `Empty`).
    pub fn row_count(&self) -> usize {
        match self {
            RangeValues::Rows(rows) => rows.len(),
            RangeValues::Empty => 0,
        }
    }
}

impl ValueRange {
    /// Collapse the wire shape into the caller-facing result, stringifying
    /// any non-string cells.
    pub fn into_range_values(self) -> RangeValues {
        if self.values.is_empty() {
            return RangeValues::Empty;
        }
        let rows = self
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        RangeValues::Rows(rows)
    }
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
