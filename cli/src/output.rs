//! Result presentation
//!
//! Results go to stdout; logs go to stderr.

use anyhow::Result;
use serde_json::json;
use std::fmt::Write;
use transaction_prioritizer_core::{Selection, StrategyOutcome};

use crate::args::OutputFormat;

/// Render a single selection
pub fn render_selection(selection: &Selection<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let doc = json!({
                "summary": selection.summary(),
                "chosen": selection.chosen(),
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "The max USD value that can be processed in {}ms is ${:.2}",
                selection.budget_ms(),
                selection.value()
            )?;
            writeln!(
                out,
                "Selected {} transaction(s) using {}ms ({} strategy)",
                selection.len(),
                selection.total_latency_ms(),
                selection.strategy()
            )?;
            for tx in selection.chosen() {
                writeln!(
                    out,
                    "  {:<40} {:>14.2}  {}",
                    tx.id(),
                    tx.amount(),
                    tx.country_code()
                )?;
            }
            Ok(out)
        }
    }
}

/// Render a strategy comparison
pub fn render_comparison(
    outcomes: &[StrategyOutcome],
    budget_ms: i64,
    format: OutputFormat,
) -> Result<String> {
    let optimum = outcomes
        .iter()
        .rev()
        .find_map(|o| o.result.as_ref().ok())
        .map(|summary| summary.value)
        .unwrap_or(0.0);

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = outcomes
                .iter()
                .map(|outcome| match &outcome.result {
                    Ok(summary) => json!({
                        "strategy": outcome.strategy,
                        "summary": summary,
                        "gap_to_optimum": outcome.gap_to(optimum),
                    }),
                    Err(e) => json!({
                        "strategy": outcome.strategy,
                        "error": e.to_string(),
                    }),
                })
                .collect();
            let doc = json!({ "budget_ms": budget_ms, "optimum": optimum, "strategies": rows });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "Strategy comparison for {}ms (optimum ${:.2})", budget_ms, optimum)?;
            for outcome in outcomes {
                match &outcome.result {
                    Ok(summary) => writeln!(
                        out,
                        "  {:<7} ${:>14.2}  {:>5} tx  {:>8}ms  gap ${:.2}",
                        outcome.strategy.as_str(),
                        summary.value,
                        summary.selected,
                        summary.total_latency_ms,
                        outcome.gap_to(optimum).unwrap_or(0.0)
                    )?,
                    Err(e) => writeln!(out, "  {:<7} failed: {}", outcome.strategy.as_str(), e)?,
                }
            }
            Ok(out)
        }
    }
}
