//! Command-line arguments
//!
//! Flags overlay the optional JSON run config; anything not given on either
//! falls back to [`RunConfig::default`].

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use transaction_prioritizer_core::{RunConfig, SelectorConfig, SelectorKind};

#[derive(Parser, Debug)]
#[command(name = "prioritize")]
#[command(about = "Pick the most valuable transactions that fit in a latency budget")]
#[command(version)]
pub struct Cli {
    /// Total processing time available, in milliseconds
    #[arg(value_name = "BUDGET_MS", allow_negative_numbers = true, value_parser = parse_budget)]
    pub budget_ms: Option<i64>,

    /// Transactions file (CSV with id,amount,bank_country_code)
    #[arg(short, long, value_name = "PATH")]
    pub transactions: Option<PathBuf>,

    /// Latency table (JSON country code -> ms); defaults to the bundled table
    #[arg(short, long, value_name = "PATH")]
    pub latencies: Option<PathBuf>,

    /// Selection strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Refuse exact runs whose table would exceed this many cells
    #[arg(long, value_name = "CELLS")]
    pub max_table_cells: Option<usize>,

    /// Run every strategy and compare against the optimum
    #[arg(long)]
    pub compare: bool,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// JSON run configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Naive,
    Greedy,
    Exact,
}

impl From<Strategy> for SelectorKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Naive => SelectorKind::Naive,
            Strategy::Greedy => SelectorKind::Greedy,
            Strategy::Exact => SelectorKind::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_budget(raw: &str) -> std::result::Result<i64, String> {
    let budget: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of milliseconds", raw))?;
    if budget < 0 {
        return Err(format!("budget must be non-negative, got {}", budget));
    }
    Ok(budget)
}

impl Cli {
    /// Merge the config file (if any) with the command-line flags
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_path(path)
                .with_context(|| format!("loading run config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(budget) = self.budget_ms {
            config.budget_ms = Some(budget);
        }
        if let Some(path) = &self.transactions {
            config.transactions_path = path.clone();
        }
        if let Some(path) = &self.latencies {
            config.latencies_path = Some(path.clone());
        }
        if let Some(strategy) = self.strategy {
            config.selector = SelectorConfig::for_kind(strategy.into());
        }
        if let Some(limit) = self.max_table_cells {
            match &mut config.selector {
                SelectorConfig::Exact { max_table_cells } => *max_table_cells = Some(limit),
                other if !self.compare => {
                    bail!("--max-table-cells only applies to the exact strategy, not {}", other.kind())
                }
                _ => {}
            }
        }

        if config.budget_ms.is_none() {
            bail!("please input a total time in ms (BUDGET_MS or budget_ms in the config)");
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_only() {
        let cli = Cli::try_parse_from(["prioritize", "1000"]).unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.budget_ms, Some(1000));
        assert_eq!(config.selector.kind(), SelectorKind::Exact);
        assert_eq!(config.latencies_path, None);
    }

    #[test]
    fn test_negative_budget_rejected_by_parser() {
        assert!(Cli::try_parse_from(["prioritize", "-5"]).is_err());
    }

    #[test]
    fn test_non_numeric_budget_rejected() {
        assert!(Cli::try_parse_from(["prioritize", "soon"]).is_err());
    }

    #[test]
    fn test_missing_budget_is_an_error() {
        let cli = Cli::try_parse_from(["prioritize"]).unwrap();

        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_strategy_and_table_limit() {
        let cli = Cli::try_parse_from([
            "prioritize",
            "50",
            "--strategy",
            "exact",
            "--max-table-cells",
            "1000",
        ])
        .unwrap();

        assert_eq!(
            cli.resolve().unwrap().selector,
            SelectorConfig::Exact {
                max_table_cells: Some(1000)
            }
        );
    }

    #[test]
    fn test_table_limit_with_greedy_rejected() {
        let cli = Cli::try_parse_from([
            "prioritize",
            "50",
            "-s",
            "greedy",
            "--max-table-cells",
            "1000",
        ])
        .unwrap();

        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "prioritize",
            "70",
            "-t",
            "tx.csv",
            "-l",
            "lat.json",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);

        let config = cli.resolve().unwrap();
        assert_eq!(config.transactions_path, PathBuf::from("tx.csv"));
        assert_eq!(config.latencies_path, Some(PathBuf::from("lat.json")));
    }
}
