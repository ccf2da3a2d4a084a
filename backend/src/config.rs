//! Run configuration
//!
//! Everything a batch run needs besides the data itself: where the inputs
//! live, the latency budget, and which selector to use. Loaded from JSON;
//! the CLI overlays its flags on top.
//!
//! ```json
//! {
//!   "transactions_path": "data/transactions.csv",
//!   "latencies_path": null,
//!   "budget_ms": 1000,
//!   "selector": { "type": "exact", "max_table_cells": 50000000 }
//! }
//! ```

use crate::selector::SelectorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Batch run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Transactions file (CSV)
    #[serde(default = "default_transactions_path")]
    pub transactions_path: PathBuf,

    /// Latency table (JSON); `None` uses the bundled table
    #[serde(default)]
    pub latencies_path: Option<PathBuf>,

    /// Total processing time available (ms)
    #[serde(default)]
    pub budget_ms: Option<i64>,

    /// Selection strategy
    #[serde(default)]
    pub selector: SelectorConfig,
}

fn default_transactions_path() -> PathBuf {
    PathBuf::from("transactions.csv")
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            transactions_path: default_transactions_path(),
            latencies_path: None,
            budget_ms: None,
            selector: SelectorConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(budget) = self.budget_ms {
            if budget < 0 {
                return Err(ConfigError::Invalid(format!(
                    "budget_ms must be non-negative, got {}",
                    budget
                )));
            }
        }

        if let SelectorConfig::Exact {
            max_table_cells: Some(0),
        } = self.selector
        {
            return Err(ConfigError::Invalid(
                "max_table_cells must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
