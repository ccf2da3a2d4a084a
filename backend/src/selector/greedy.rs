//! Ratio-Greedy Selector
//!
//! Heuristic: process the transactions that earn the most per millisecond
//! first.
//!
//! # Behavior
//!
//! - Ratio = amount / latency of the transaction's country
//! - Stable sort by ratio, descending (equal ratios keep input order)
//! - Accept in that order until the next transaction does not fit, then stop
//!
//! The walk stops at the first transaction it cannot afford even when a
//! later, cheaper one would still fit. The result is never better than the
//! exact optimum and can be noticeably worse.
//!
//! # Complexity
//!
//! O(N log N) time, O(N) extra space.

use super::validation::{resolve_latency, validate_amounts, validate_budget};
use super::{Selector, SelectorError, SelectorKind};
use crate::models::{LatencyTable, Selection, Transaction};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Ratio-greedy heuristic selector
///
/// # Example
///
/// ```
/// use transaction_prioritizer_core::selector::{RatioGreedySelector, Selector};
/// use transaction_prioritizer_core::{LatencyTable, Transaction};
///
/// let transactions = vec![
///     Transaction::new("a", 100.0, "us"), // 2.0 per ms
///     Transaction::new("b", 60.0, "gb"),  // 3.0 per ms
/// ];
/// let latencies = LatencyTable::new().with_entry("us", 50).with_entry("gb", 20);
///
/// let selection = RatioGreedySelector::new()
///     .select(&transactions, &latencies, 70)
///     .unwrap();
///
/// assert_eq!(selection.ids(), vec!["b", "a"]);
/// assert_eq!(selection.value(), 160.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioGreedySelector;

impl RatioGreedySelector {
    pub fn new() -> Self {
        Self
    }
}

struct Candidate<'a> {
    tx: &'a Transaction,
    latency: u64,
    ratio: f64,
}

impl Selector for RatioGreedySelector {
    fn kind(&self) -> SelectorKind {
        SelectorKind::Greedy
    }

    fn select<'a>(
        &self,
        transactions: &'a [Transaction],
        latencies: &LatencyTable,
        budget_ms: i64,
    ) -> Result<Selection<'a>, SelectorError> {
        let budget = validate_budget(budget_ms)?;
        validate_amounts(transactions)?;

        let mut candidates = Vec::with_capacity(transactions.len());
        for tx in transactions {
            let latency = match resolve_latency(latencies, tx) {
                Ok(0) | Err(SelectorError::MissingLatencyEntry { .. }) => {
                    return Err(SelectorError::DivisionByZeroOrMissingLatency {
                        country_code: tx.country_code().to_string(),
                        transaction_id: tx.id().to_string(),
                    });
                }
                Ok(latency) => latency,
                Err(e) => return Err(e),
            };
            candidates.push(Candidate {
                tx,
                latency,
                ratio: tx.amount() / latency as f64,
            });
        }

        // sort_by is stable; ratios are finite so Equal only covers real ties
        candidates.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));

        let mut time_used = 0u64;
        let mut value = 0.0;
        let mut chosen = Vec::new();

        for candidate in &candidates {
            if time_used + candidate.latency > budget {
                let remaining_ms = budget - time_used;
                let unvisited = candidates.len() - chosen.len();
                if remaining_ms > 0 {
                    warn!(
                        stopped_at = candidate.tx.id(),
                        remaining_ms,
                        unvisited,
                        "greedy walk stopped early with unused budget"
                    );
                } else {
                    debug!(
                        stopped_at = candidate.tx.id(),
                        unvisited,
                        "greedy walk used the whole budget"
                    );
                }
                break;
            }
            time_used += candidate.latency;
            value += candidate.tx.amount();
            chosen.push(candidate.tx);
        }

        info!(
            strategy = "greedy",
            transactions = transactions.len(),
            budget_ms = budget,
            selected = chosen.len(),
            total_latency_ms = time_used,
            value,
            "selection complete"
        );

        Ok(Selection::new(
            SelectorKind::Greedy,
            budget,
            value,
            time_used,
            chosen,
        ))
    }
}
