//! Latency table loading
//!
//! The table is a JSON object mapping country code to an integer latency in
//! milliseconds, e.g. `{"us": 50, "gb": 20}`. Fractional values are rejected
//! by the parser.

use super::LoadError;
use crate::models::LatencyTable;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Bundled default table
const EMBEDDED_LATENCIES: &str = include_str!("../../data/latencies.json");

impl LatencyTable {
    /// Parse a table from a JSON string
    ///
    /// # Example
    /// ```
    /// use transaction_prioritizer_core::LatencyTable;
    ///
    /// let table = LatencyTable::from_json_str(r#"{"us": 50, "gb": 20}"#).unwrap();
    /// assert_eq!(table.get("gb"), Some(20));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let table = Self::from_json_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = table.len(), "latency table loaded");
        Ok(table)
    }

    /// Fresh copy of the bundled latency table
    ///
    /// The returned value is owned by the caller like any other table; the
    /// bundled data is only a default source.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json_str(EMBEDDED_LATENCIES)
    }
}
