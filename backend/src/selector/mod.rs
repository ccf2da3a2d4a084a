//! Transaction Selector Module
//!
//! Selectors decide **which** transactions to process within a fixed latency
//! budget so that the processed value is as large as possible. Every
//! transaction costs the latency of its originating bank's country, looked up
//! in a caller-supplied [`LatencyTable`].
//!
//! # Selector Interface
//!
//! All strategies implement the `Selector` trait:
//! ```rust
//! use transaction_prioritizer_core::selector::{Selector, SelectorError, SelectorKind};
//! use transaction_prioritizer_core::{LatencyTable, Selection, Transaction};
//!
//! struct NothingSelector;
//!
//! impl Selector for NothingSelector {
//!     fn kind(&self) -> SelectorKind {
//!         SelectorKind::Naive
//!     }
//!
//!     fn select<'a>(
//!         &self,
//!         _transactions: &'a [Transaction],
//!         _latencies: &LatencyTable,
//!         _budget_ms: i64,
//!     ) -> Result<Selection<'a>, SelectorError> {
//!         Err(SelectorError::InvalidArgument("not implemented".to_string()))
//!     }
//! }
//! ```
//!
//! Available strategies:
//! 1. **Naive**: largest amounts first, stop at the first one that does not fit
//! 2. **Greedy**: best amount-per-millisecond ratio first, same stopping rule
//! 3. **Exact**: dynamic-programming knapsack, always optimal
//!
//! Strategies are picked at runtime through [`SelectorConfig`]:
//!
//! ```rust
//! use transaction_prioritizer_core::selector::SelectorConfig;
//! use transaction_prioritizer_core::{LatencyTable, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new("a", 100.0, "us"),
//!     Transaction::new("b", 60.0, "gb"),
//!     Transaction::new("c", 120.0, "us"),
//! ];
//! let latencies = LatencyTable::new().with_entry("us", 50).with_entry("gb", 20);
//!
//! let selector = SelectorConfig::default().build();
//! let selection = selector.select(&transactions, &latencies, 70).unwrap();
//!
//! assert_eq!(selection.value(), 180.0);
//! assert_eq!(selection.ids(), vec!["b", "c"]);
//! ```

use crate::models::{LatencyTable, Selection, Transaction};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod compare;
pub mod greedy;
pub mod knapsack;
pub mod naive;
mod validation;

pub use compare::{compare, StrategyOutcome};
pub use greedy::RatioGreedySelector;
pub use knapsack::KnapsackSelector;
pub use naive::NaiveSelector;

/// Errors that abort a selection call
///
/// A call either succeeds with a complete selection or fails with one of
/// these; there are no partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectorError {
    #[error("No latency entry for country code '{country_code}' (transaction {transaction_id})")]
    MissingLatencyEntry {
        country_code: String,
        transaction_id: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Latency for country code '{country_code}' is zero or missing (transaction {transaction_id}), ratio is undefined"
    )]
    DivisionByZeroOrMissingLatency {
        country_code: String,
        transaction_id: String,
    },

    #[error("Knapsack table needs {cells} cells, limit is {limit}")]
    TableTooLarge { cells: usize, limit: usize },
}

/// Identifies a selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// Amount-descending baseline
    Naive,
    /// Ratio-greedy heuristic
    Greedy,
    /// Dynamic-programming knapsack
    Exact,
}

impl SelectorKind {
    /// Every strategy, cheapest first
    pub fn all() -> [SelectorKind; 3] {
        [SelectorKind::Naive, SelectorKind::Greedy, SelectorKind::Exact]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Naive => "naive",
            SelectorKind::Greedy => "greedy",
            SelectorKind::Exact => "exact",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy that selects transactions under a latency budget
///
/// Implementations are pure with respect to their inputs: the same
/// transactions, table and budget always give the same selection.
pub trait Selector {
    /// Which strategy this is
    fn kind(&self) -> SelectorKind;

    /// Choose transactions whose total latency fits in `budget_ms`
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a negative budget, a negative or non-finite
    ///   amount, or a negative latency
    /// - `MissingLatencyEntry` when a transaction's country is not in the table
    ///   (the greedy strategy reports `DivisionByZeroOrMissingLatency` instead)
    fn select<'a>(
        &self,
        transactions: &'a [Transaction],
        latencies: &LatencyTable,
        budget_ms: i64,
    ) -> Result<Selection<'a>, SelectorError>;
}

/// Runtime selector choice
///
/// # Example
///
/// ```
/// use transaction_prioritizer_core::selector::{SelectorConfig, SelectorKind};
///
/// let config: SelectorConfig =
///     serde_json::from_str(r#"{"type": "exact", "max_table_cells": 1000000}"#).unwrap();
/// assert_eq!(config.kind(), SelectorKind::Exact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectorConfig {
    /// Largest amount first
    Naive,

    /// Best amount-to-latency ratio first
    Greedy,

    /// Optimal knapsack
    Exact {
        /// Reject problems whose value table would exceed this many cells
        #[serde(default)]
        max_table_cells: Option<usize>,
    },
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig::Exact {
            max_table_cells: None,
        }
    }
}

impl SelectorConfig {
    /// Config for a strategy with default parameters
    pub fn for_kind(kind: SelectorKind) -> Self {
        match kind {
            SelectorKind::Naive => SelectorConfig::Naive,
            SelectorKind::Greedy => SelectorConfig::Greedy,
            SelectorKind::Exact => SelectorConfig::default(),
        }
    }

    pub fn kind(&self) -> SelectorKind {
        match self {
            SelectorConfig::Naive => SelectorKind::Naive,
            SelectorConfig::Greedy => SelectorKind::Greedy,
            SelectorConfig::Exact { .. } => SelectorKind::Exact,
        }
    }

    /// Instantiate the configured selector
    pub fn build(&self) -> Box<dyn Selector> {
        match self {
            SelectorConfig::Naive => Box::new(NaiveSelector::new()),
            SelectorConfig::Greedy => Box::new(RatioGreedySelector::new()),
            SelectorConfig::Exact { max_table_cells } => {
                let selector = KnapsackSelector::new();
                match max_table_cells {
                    Some(limit) => Box::new(selector.with_max_table_cells(*limit)),
                    None => Box::new(selector),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_kind() {
        for kind in SelectorKind::all() {
            let selector = SelectorConfig::for_kind(kind).build();
            assert_eq!(selector.kind(), kind);
        }
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SelectorConfig::Exact {
            max_table_cells: Some(42),
        };
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(json, r#"{"type":"exact","max_table_cells":42}"#);
        assert_eq!(serde_json::from_str::<SelectorConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_unit_variants_parse_from_tag() {
        let naive: SelectorConfig = serde_json::from_str(r#"{"type":"naive"}"#).unwrap();
        let exact: SelectorConfig = serde_json::from_str(r#"{"type":"exact"}"#).unwrap();

        assert_eq!(naive, SelectorConfig::Naive);
        assert_eq!(exact, SelectorConfig::default());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SelectorKind::Greedy.to_string(), "greedy");
        assert_eq!(
            serde_json::to_string(&SelectorKind::Exact).unwrap(),
            r#""exact""#
        );
    }
}
