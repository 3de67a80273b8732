//! Google Sheets v4 values client
//!
//! A thin authenticated wrapper over the `values.get` endpoint. The client
//! holds a bearer token obtained by `gsheets-auth` and issues exactly one
//! request per call — no retries, no pagination, no caching. An empty range
//! is a success (`RangeValues::Empty`), kept distinct from any error.

pub mod client;
pub mod error;
pub mod values;

pub use client::SheetsClient;
pub use error::{Error, Result};
pub use values::{RangeValues, ValueRange};
