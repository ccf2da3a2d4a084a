//! Input loading
//!
//! Turns the external resources into in-memory values:
//! - transactions from delimited text (`id,amount,bank_country_code`)
//! - the latency table from a JSON object of country code → milliseconds
//!
//! Load failures are reported as [`LoadError`] at this boundary and are
//! never translated into selection errors.

use std::path::Path;
use thiserror::Error;

pub mod latencies;
pub mod transactions;

pub use transactions::{read_transactions, read_transactions_from_path};

/// Errors raised while reading input resources
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
