//! Transaction Prioritizer Core
//!
//! Chooses which transactions to process within a fixed latency budget so
//! that the processed value is as large as possible. Each transaction's cost
//! is the latency of its originating bank's country.
//!
//! # Architecture
//!
//! - **models**: Domain types (Transaction, LatencyTable, Selection)
//! - **selector**: Selection strategies (naive, ratio-greedy, exact knapsack)
//! - **io**: Loading transactions (CSV) and latency tables (JSON)
//! - **config**: Run configuration
//!
//! # Critical Invariants
//!
//! 1. A selection never exceeds the budget
//! 2. Unknown countries are errors, never free transactions
//! 3. Same input → same selection (stable sorts, fixed tie-break)
//!
//! # Example
//!
//! ```
//! use transaction_prioritizer_core::selector::{KnapsackSelector, Selector};
//! use transaction_prioritizer_core::{LatencyTable, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new("a", 100.0, "us"),
//!     Transaction::new("b", 60.0, "gb"),
//!     Transaction::new("c", 120.0, "us"),
//! ];
//! let latencies = LatencyTable::new().with_entry("us", 50).with_entry("gb", 20);
//!
//! let best = KnapsackSelector::new().select(&transactions, &latencies, 70).unwrap();
//! assert_eq!(best.value(), 180.0);
//! ```

// Module declarations
pub mod config;
pub mod io;
pub mod models;
pub mod selector;

// Re-exports for convenience
pub use config::{ConfigError, RunConfig};
pub use io::LoadError;
pub use models::{LatencyTable, Selection, SelectionSummary, Transaction};
pub use selector::{
    compare, KnapsackSelector, NaiveSelector, RatioGreedySelector, Selector, SelectorConfig,
    SelectorError, SelectorKind, StrategyOutcome,
};
