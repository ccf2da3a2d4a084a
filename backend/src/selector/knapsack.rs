//! Exact Knapsack Selector
//!
//! Computes the maximum value that fits in the budget with the classic 0/1
//! knapsack recurrence, then walks a `keep` table backwards to recover one
//! optimal subset.
//!
//! # Recurrence
//!
//! `V[i][t]` is the best value using the first `i` transactions (input order)
//! under an allowance of `t` ms:
//!
//! ```text
//! V[0][t] = 0
//! V[i][0] = 0
//! V[i][t] = max(V[i-1][t], amount[i-1] + V[i-1][t - w[i-1]])   (second term only if t >= w)
//! keep[i][t] = second term strictly greater than the first
//! ```
//!
//! Column 0 is never filled: with no time left nothing is processed, not even
//! a transaction from a zero-latency country.
//!
//! Ties favor leaving the current transaction out, which makes the traceback
//! deterministic: among optimal subsets the one built from earlier
//! transactions wins.
//!
//! # Complexity
//!
//! O(N · B) time and space where B = min(budget, total latency of all
//! transactions + 1). Both tables are flat buffers indexed `i * (B + 1) + t`.

use super::validation::{resolve_latencies, validate_amounts, validate_budget};
use super::{Selector, SelectorError, SelectorKind};
use crate::models::{LatencyTable, Selection, Transaction};
use tracing::{debug, info};

/// Optimal dynamic-programming selector
///
/// # Example
///
/// ```
/// use transaction_prioritizer_core::selector::{KnapsackSelector, Selector};
/// use transaction_prioritizer_core::{LatencyTable, Transaction};
///
/// let transactions = vec![
///     Transaction::new("a", 100.0, "us"),
///     Transaction::new("b", 60.0, "gb"),
///     Transaction::new("c", 120.0, "us"),
/// ];
/// let latencies = LatencyTable::new().with_entry("us", 50).with_entry("gb", 20);
///
/// let selection = KnapsackSelector::new()
///     .select(&transactions, &latencies, 70)
///     .unwrap();
///
/// assert_eq!(selection.value(), 180.0);
/// assert_eq!(selection.ids(), vec!["b", "c"]);
/// assert_eq!(selection.total_latency_ms(), 70);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackSelector {
    max_table_cells: Option<usize>,
}

impl KnapsackSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse problems whose table would need more than `limit` cells
    ///
    /// The check happens before allocation, so an oversized problem fails
    /// fast with `TableTooLarge` instead of exhausting memory.
    pub fn with_max_table_cells(mut self, limit: usize) -> Self {
        self.max_table_cells = Some(limit);
        self
    }

    pub fn max_table_cells(&self) -> Option<usize> {
        self.max_table_cells
    }
}

/// Value and keep tables in one flat arena each
struct DpTable {
    width: usize,
    values: Vec<f64>,
    keep: Vec<bool>,
}

impl DpTable {
    fn new(rows: usize, width: usize) -> Self {
        let cells = rows * width;
        Self {
            width,
            values: vec![0.0; cells],
            keep: vec![false; cells],
        }
    }

    #[inline]
    fn index(&self, i: usize, t: usize) -> usize {
        i * self.width + t
    }

    #[inline]
    fn value(&self, i: usize, t: usize) -> f64 {
        self.values[self.index(i, t)]
    }

    #[inline]
    fn kept(&self, i: usize, t: usize) -> bool {
        self.keep[self.index(i, t)]
    }

    #[inline]
    fn set(&mut self, i: usize, t: usize, value: f64, keep: bool) {
        let idx = self.index(i, t);
        self.values[idx] = value;
        self.keep[idx] = keep;
    }
}

impl Selector for KnapsackSelector {
    fn kind(&self) -> SelectorKind {
        SelectorKind::Exact
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

        let n = transactions.len();
        if n == 0 {
            return Ok(Selection::empty(SelectorKind::Exact, budget));
        }

        // Once the allowance exceeds the total latency, every path through
        // the table stays off column 0 and further columns change nothing.
        let saturation = weights
            .iter()
            .fold(0u64, |acc, w| acc.saturating_add(*w))
            .saturating_add(1);
        let capacity = usize::try_from(budget.min(saturation)).map_err(|_| {
            SelectorError::InvalidArgument(format!(
                "budget {} does not fit in memory on this platform",
                budget
            ))
        })?;

        let width = capacity.checked_add(1);
        let cells = width.and_then(|w| w.checked_mul(n + 1)).ok_or_else(|| {
            SelectorError::InvalidArgument(format!(
                "knapsack table for {} transactions and {}ms overflows",
                n, capacity
            ))
        })?;
        if let Some(limit) = self.max_table_cells {
            if cells > limit {
                return Err(SelectorError::TableTooLarge { cells, limit });
            }
        }

        debug!(
            strategy = "exact",
            transactions = n,
            budget_ms = budget,
            capacity,
            cells,
            "allocating knapsack table"
        );

        let mut table = DpTable::new(n + 1, capacity + 1);

        for i in 1..=n {
            let amount = transactions[i - 1].amount();
            // A weight beyond usize can never fit; usize::MAX keeps the guard false
            let w = usize::try_from(weights[i - 1]).unwrap_or(usize::MAX);

            for t in 1..=capacity {
                let without_current = table.value(i - 1, t);
                if t >= w {
                    let with_current = amount + table.value(i - 1, t - w);
                    if with_current > without_current {
                        table.set(i, t, with_current, true);
                        continue;
                    }
                }
                table.set(i, t, without_current, false);
            }
        }

        let value = table.value(n, capacity);

        // Traceback from (n, capacity)
        let mut t = capacity;
        let mut total_latency = 0u64;
        let mut chosen = Vec::new();
        for i in (1..=n).rev() {
            if table.kept(i, t) {
                let w = weights[i - 1];
                chosen.push(&transactions[i - 1]);
                // kept implies t >= w, so w fits in usize
                t -= w as usize;
                total_latency += w;
            }
        }
        chosen.reverse();

        info!(
            strategy = "exact",
            budget_ms = budget,
            selected = chosen.len(),
            total_latency_ms = total_latency,
            value,
            "selection complete"
        );

        Ok(Selection::new(
            SelectorKind::Exact,
            budget,
            value,
            total_latency,
            chosen,
        ))
    }
}
