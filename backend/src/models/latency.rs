//! Latency table
//!
//! Maps a bank country code to the processing latency (milliseconds) of a
//! transaction originating there. The table is a caller-owned value passed
//! into every selector call; nothing in the engine holds on to it.
//!
//! Loading from JSON lives in [`crate::io::latencies`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Country code → latency (ms) lookup
///
/// Latencies are stored as `i64` so that out-of-contract negative values
/// can be represented and rejected by the selectors instead of wrapping.
///
/// # Example
/// ```
/// use transaction_prioritizer_core::LatencyTable;
///
/// let table = LatencyTable::new()
///     .with_entry("us", 50)
///     .with_entry("gb", 20);
///
/// assert_eq!(table.get("us"), Some(50));
/// assert_eq!(table.get("fr"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LatencyTable {
    entries: BTreeMap<String, i64>,
}

impl LatencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_entry(mut self, country_code: impl Into<String>, latency_ms: i64) -> Self {
        self.insert(country_code, latency_ms);
        self
    }

    /// Insert or replace an entry, returning the previous latency if any
    pub fn insert(&mut self, country_code: impl Into<String>, latency_ms: i64) -> Option<i64> {
        self.entries.insert(country_code.into(), latency_ms)
    }

    /// Look up the latency for a country code
    ///
    /// Returns `None` for unknown codes. Callers must never substitute a
    /// default: an unknown country is not a free transaction.
    pub fn get(&self, country_code: &str) -> Option<i64> {
        self.entries.get(country_code).copied()
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.entries.contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in country-code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(code, latency)| (code.as_str(), *latency))
    }
}

impl From<HashMap<String, i64>> for LatencyTable {
    fn from(entries: HashMap<String, i64>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for LatencyTable {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
