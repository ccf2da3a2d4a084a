//! Domain models for the transaction prioritizer

pub mod latency;
pub mod selection;
pub mod transaction;

// Re-exports
pub use latency::LatencyTable;
pub use selection::{Selection, SelectionSummary};
pub use transaction::Transaction;
