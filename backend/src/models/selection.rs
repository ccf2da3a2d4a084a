//! Selection result
//!
//! The outcome of one selector call: the chosen transactions (borrowed from
//! the caller's input) together with the value and latency they account for.
//! A `Selection` is built fresh by every call and owned by the caller.

use crate::models::transaction::Transaction;
use crate::selector::SelectorKind;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Transactions chosen by a selector
///
/// `value` is the cumulative amount of `chosen`. For the exact selector it
/// is read from the final cell of the value table, for the other strategies
/// it is accumulated while walking the sorted input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<'a> {
    strategy: SelectorKind,
    budget_ms: u64,
    value: f64,
    total_latency_ms: u64,
    chosen: Vec<&'a Transaction>,
}

/// Owned, serializable digest of a [`Selection`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub strategy: SelectorKind,
    pub budget_ms: u64,
    pub value: f64,
    pub selected: usize,
    pub total_latency_ms: u64,
    pub fingerprint: String,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(
        strategy: SelectorKind,
        budget_ms: u64,
        value: f64,
        total_latency_ms: u64,
        chosen: Vec<&'a Transaction>,
    ) -> Self {
        Self {
            strategy,
            budget_ms,
            value,
            total_latency_ms,
            chosen,
        }
    }

    /// Empty result for a strategy (no input, or nothing fits)
    pub(crate) fn empty(strategy: SelectorKind, budget_ms: u64) -> Self {
        Self::new(strategy, budget_ms, 0.0, 0, Vec::new())
    }

    /// Strategy that produced this selection
    pub fn strategy(&self) -> SelectorKind {
        self.strategy
    }

    /// Budget the selection was computed for (ms)
    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }

    /// Cumulative amount of the chosen transactions
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sum of the chosen transactions' latencies (ms), never above the budget
    pub fn total_latency_ms(&self) -> u64 {
        self.total_latency_ms
    }

    /// Chosen transactions, in input order for the exact selector and in
    /// acceptance order for the sorting strategies
    pub fn chosen(&self) -> &[&'a Transaction] {
        &self.chosen
    }

    pub fn into_chosen(self) -> Vec<&'a Transaction> {
        self.chosen
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// IDs of the chosen transactions
    pub fn ids(&self) -> Vec<&'a str> {
        self.chosen.iter().map(|tx| tx.id()).collect()
    }

    /// SHA256 over strategy, budget, value bits and chosen IDs
    ///
    /// Two runs over identical input must produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.strategy.as_str().as_bytes());
        hasher.update(self.budget_ms.to_le_bytes());
        hasher.update(self.value.to_bits().to_le_bytes());
        for tx in &self.chosen {
            hasher.update(tx.id().as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            strategy: self.strategy,
            budget_ms: self.budget_ms,
            value: self.value,
            selected: self.chosen.len(),
            total_latency_ms: self.total_latency_ms,
            fingerprint: self.fingerprint(),
        }
    }
}
