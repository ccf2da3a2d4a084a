//! Naive Selector
//!
//! Simplest baseline: largest transactions first.
//!
//! # Behavior
//!
//! - Stable sort by amount, descending
//! - Accept while the cumulative latency stays within budget
//! - Stop at the first transaction that does not fit
//!
//! # Use Case
//!
//! - Baseline for comparison with the ratio heuristic and the exact solver
//! - Ignores latency when ordering, so it does well only when latencies are
//!   roughly uniform

use super::validation::{resolve_latencies, validate_amounts, validate_budget};
use super::{Selector, SelectorError, SelectorKind};
use crate::models::{LatencyTable, Selection, Transaction};
use std::cmp::Ordering;
use tracing::info;

/// Amount-descending selector
///
/// Zero-latency transactions are accepted even with a zero budget; the exact
/// selector leaves them out in that case.
///
/// # Example
///
/// ```
/// use transaction_prioritizer_core::selector::{NaiveSelector, Selector};
/// use transaction_prioritizer_core::{LatencyTable, Transaction};
///
/// let transactions = vec![
///     Transaction::new("a", 100.0, "us"),
///     Transaction::new("b", 60.0, "gb"),
///     Transaction::new("c", 120.0, "us"),
/// ];
/// let latencies = LatencyTable::new().with_entry("us", 50).with_entry("gb", 20);
///
/// let selection = NaiveSelector::new().select(&transactions, &latencies, 70).unwrap();
///
/// // "c" first (50ms), then "a" would need 100ms in total: stop
/// assert_eq!(selection.ids(), vec!["c"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSelector;

impl NaiveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Selector for NaiveSelector {
    fn kind(&self) -> SelectorKind {
        SelectorKind::Naive
    }

    fn select<'a>(
        &self,
        transactions: &'a [Transaction],
        latencies: &LatencyTable,
        budget_ms: i64,
    ) -> Result<Selection<'a>, SelectorError> {
        let budget = validate_budget(budget_ms)?;
        validate_amounts(transactions)?;
        let weights = resolve_latencies(latencies, transactions)?;

        let mut order: Vec<(&'a Transaction, u64)> =
            transactions.iter().zip(weights).collect();
        order.sort_by(|a, b| {
            b.0.amount()
                .partial_cmp(&a.0.amount())
                .unwrap_or(Ordering::Equal)
        });

        let mut time_used = 0u64;
        let mut value = 0.0;
        let mut chosen = Vec::new();

        for (tx, latency) in order {
            // latencies go up to i64::MAX, so the running total can overflow
            match time_used.checked_add(latency) {
                Some(next) if next <= budget => {
                    time_used = next;
                    value += tx.amount();
                    chosen.push(tx);
                }
                _ => break,
            }
        }

        info!(
            strategy = "naive",
            transactions = transactions.len(),
            budget_ms = budget,
            selected = chosen.len(),
            total_latency_ms = time_used,
            value,
            "selection complete"
        );

        Ok(Selection::new(
            SelectorKind::Naive,
            budget,
            value,
            time_used,
            chosen,
        ))
    }
}
