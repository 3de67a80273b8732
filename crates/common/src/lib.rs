//! Common types for the Sheets range reader crates

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
