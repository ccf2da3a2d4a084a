//! `prioritize` - choose the transactions to process within a latency budget
//!
//! ```text
//! prioritize 1000 --transactions transactions.csv --strategy exact
//! prioritize 1000 --latencies latencies.json --compare --format json
//! ```

mod args;
mod output;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transaction_prioritizer_core::io::read_transactions_from_path;
use transaction_prioritizer_core::{compare, LatencyTable, RunConfig, SelectorConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = cli.resolve()?;
    let budget_ms = config
        .budget_ms
        .context("please input a total time in ms")?;

    let transactions = read_transactions_from_path(&config.transactions_path).with_context(|| {
        format!(
            "loading transactions from {}",
            config.transactions_path.display()
        )
    })?;
    let latencies = load_latencies(&config)?;
    info!(
        transactions = transactions.len(),
        countries = latencies.len(),
        budget_ms,
        "inputs loaded"
    );

    let rendered = if cli.compare {
        let max_table_cells = match config.selector {
            SelectorConfig::Exact { max_table_cells } => max_table_cells,
            _ => cli.max_table_cells,
        };
        let outcomes = compare(&transactions, &latencies, budget_ms, max_table_cells)
            .context("comparing strategies")?;
        output::render_comparison(&outcomes, budget_ms, cli.format)?
    } else {
        let selector = config.selector.build();
        let selection = selector
            .select(&transactions, &latencies, budget_ms)
            .with_context(|| format!("running {} selector", selector.kind()))?;
        debug!(
            strategy = %selection.strategy(),
            fingerprint = %selection.fingerprint(),
            "selection fingerprint"
        );
        output::render_selection(&selection, cli.format)?
    };

    print!("{}", rendered);
    Ok(())
}

fn load_latencies(config: &RunConfig) -> Result<LatencyTable> {
    match &config.latencies_path {
        Some(path) => LatencyTable::from_path(path)
            .with_context(|| format!("loading latency table from {}", path.display())),
        None => {
            debug!("using bundled latency table");
            LatencyTable::embedded().context("parsing bundled latency table")
        }
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
