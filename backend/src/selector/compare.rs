//! Strategy comparison
//!
//! Runs every strategy over the same input so the heuristics can be judged
//! against the exact optimum.

use super::{SelectorConfig, SelectorError, SelectorKind};
use crate::models::{LatencyTable, SelectionSummary, Transaction};
use tracing::{info, warn};

/// Result of one strategy in a comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    pub strategy: SelectorKind,
    pub result: Result<SelectionSummary, SelectorError>,
}

impl StrategyOutcome {
    /// How much value this strategy left on the table relative to `optimum`
    pub fn gap_to(&self, optimum: f64) -> Option<f64> {
        self.result
            .as_ref()
            .ok()
            .map(|summary| optimum - summary.value)
    }
}

/// Run all strategies, cheapest first, exact last
///
/// Returns an error only when the exact strategy fails: without the optimum
/// there is nothing to compare against. Heuristic failures (e.g. the ratio
/// heuristic on a zero-latency country) are recorded in their outcome.
pub fn compare(
    transactions: &[Transaction],
    latencies: &LatencyTable,
    budget_ms: i64,
    max_table_cells: Option<usize>,
) -> Result<Vec<StrategyOutcome>, SelectorError> {
    let mut outcomes = Vec::with_capacity(SelectorKind::all().len());

    for kind in SelectorKind::all() {
        let config = match kind {
            SelectorKind::Exact => SelectorConfig::Exact { max_table_cells },
            other => SelectorConfig::for_kind(other),
        };
        let result = config
            .build()
            .select(transactions, latencies, budget_ms)
            .map(|selection| selection.summary());

        if let Err(e) = &result {
            if kind == SelectorKind::Exact {
                return Err(e.clone());
            }
            warn!(strategy = kind.as_str(), error = %e, "strategy failed during comparison");
        }

        outcomes.push(StrategyOutcome {
            strategy: kind,
            result,
        });
    }

    if let Some(Ok(optimum)) = outcomes.last().map(|o| o.result.as_ref()) {
        info!(
            budget_ms,
            optimum = optimum.value,
            "compared {} strategies",
            outcomes.len()
        );
    }

    Ok(outcomes)
}
