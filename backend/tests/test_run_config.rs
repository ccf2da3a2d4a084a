//! RunConfig loading and validation

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use transaction_prioritizer_core::{ConfigError, RunConfig, SelectorConfig, SelectorKind};

#[test]
fn test_full_config() {
    let json = r#"{
        "transactions_path": "data/transactions.csv",
        "latencies_path": "data/latencies.json",
        "budget_ms": 1000,
        "selector": { "type": "greedy" }
    }"#;
    let config = RunConfig::from_json_str(json).unwrap();

    assert_eq!(config.transactions_path, PathBuf::from("data/transactions.csv"));
    assert_eq!(config.latencies_path, Some(PathBuf::from("data/latencies.json")));
    assert_eq!(config.budget_ms, Some(1000));
    assert_eq!(config.selector.kind(), SelectorKind::Greedy);
}

#[test]
fn test_defaults() {
    let config = RunConfig::default();

    assert_eq!(config.transactions_path, PathBuf::from("transactions.csv"));
    assert_eq!(config.latencies_path, None);
    assert_eq!(config.budget_ms, None);
    assert_eq!(
        config.selector,
        SelectorConfig::Exact {
            max_table_cells: None
        }
    );
}

#[test]
fn test_negative_budget_rejected() {
    assert!(matches!(
        RunConfig::from_json_str(r#"{"budget_ms": -5}"#),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_unknown_selector_rejected() {
    assert!(matches!(
        RunConfig::from_json_str(r#"{"selector": {"type": "quantum"}}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"budget_ms": 250}"#).unwrap();
    file.flush().unwrap();

    let config = RunConfig::from_path(file.path()).unwrap();
    assert_eq!(config.budget_ms, Some(250));
}

#[test]
fn test_from_missing_path() {
    assert!(matches!(
        RunConfig::from_path("/definitely/not/here.json"),
        Err(ConfigError::Io { .. })
    ));
}
