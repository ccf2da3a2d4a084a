//! RatioGreedySelector integration tests
//!
//! The ratio heuristic is fast but not optimal. These tests pin down its
//! ordering, its stop-at-first-misfit walk and its error behavior.

use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use transaction_prioritizer_core::{
    KnapsackSelector, LatencyTable, RatioGreedySelector, Selector, SelectorError, Transaction,
};

fn reference_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("a", 100.0, "us"),
        Transaction::new("b", 60.0, "gb"),
        Transaction::new("c", 120.0, "us"),
    ]
}

fn reference_latencies() -> LatencyTable {
    LatencyTable::new().with_entry("us", 50).with_entry("gb", 20)
}

#[test]
fn test_reference_scenario() {
    let txs = reference_transactions();
    let selection = RatioGreedySelector::new()
        .select(&txs, &reference_latencies(), 70)
        .unwrap();

    // ratios: a = 2.0, b = 3.0, c = 2.4
    assert_eq!(selection.ids(), vec!["b", "c"]);
    assert_eq!(selection.value(), 180.0);
    assert_eq!(selection.total_latency_ms(), 70);
}

#[test]
fn test_zero_budget_selects_nothing() {
    let txs = reference_transactions();
    let selection = RatioGreedySelector::new()
        .select(&txs, &reference_latencies(), 0)
        .unwrap();

    assert!(selection.is_empty());
    assert_eq!(selection.value(), 0.0);
}

#[test]
fn test_empty_input() {
    let selection = RatioGreedySelector::new()
        .select(&[], &reference_latencies(), 1_000)
        .unwrap();

    assert!(selection.is_empty());
    assert_eq!(selection.value(), 0.0);
}

#[test]
fn test_heuristic_can_miss_the_optimum() {
    // Ratio order picks "dense" first (5.0/ms) and then cannot afford either
    // of the big ones; the optimum takes both big transactions.
    let latencies = LatencyTable::new().with_entry("aa", 10).with_entry("bb", 50);
    let txs = vec![
        Transaction::new("dense", 50.0, "aa"),
        Transaction::new("big_1", 200.0, "bb"),
        Transaction::new("big_2", 200.0, "bb"),
    ];

    let greedy = RatioGreedySelector::new().select(&txs, &latencies, 100).unwrap();
    let exact = KnapsackSelector::new().select(&txs, &latencies, 100).unwrap();

    assert_eq!(greedy.ids(), vec!["dense", "big_1"]);
    assert_eq!(greedy.value(), 250.0);
    assert_eq!(exact.value(), 400.0);
    assert!(greedy.value() <= exact.value());
}

#[test]
fn test_missing_latency_aborts_whole_call() {
    let txs = vec![
        Transaction::new("ok", 10.0, "us"),
        Transaction::new("unknown", 10.0, "xx"),
    ];
    let result = RatioGreedySelector::new().select(&txs, &reference_latencies(), 1_000);

    assert_eq!(
        result,
        Err(SelectorError::DivisionByZeroOrMissingLatency {
            country_code: "xx".to_string(),
            transaction_id: "unknown".to_string(),
        })
    );
}

#[test]
fn test_negative_budget_is_invalid() {
    let txs = reference_transactions();
    let result = RatioGreedySelector::new().select(&txs, &reference_latencies(), -10);

    assert!(matches!(result, Err(SelectorError::InvalidArgument(_))));
}

#[test]
fn test_negative_amount_is_invalid() {
    let txs = vec![Transaction::new("neg", -1.0, "us")];
    let result = RatioGreedySelector::new().select(&txs, &reference_latencies(), 100);

    assert!(matches!(result, Err(SelectorError::InvalidArgument(_))));
}

#[test]
fn test_repeated_calls_identical() {
    let txs = reference_transactions();
    let selector = RatioGreedySelector::new();
    let first = selector.select(&txs, &reference_latencies(), 70).unwrap();
    let second = selector.select(&txs, &reference_latencies(), 70).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

/// In-memory log sink shared with the subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn select_with_captured_logs(budget_ms: i64) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .finish();

    let txs = reference_transactions();
    tracing::subscriber::with_default(subscriber, || {
        RatioGreedySelector::new()
            .select(&txs, &reference_latencies(), budget_ms)
            .unwrap();
    });

    buffer.contents()
}

#[test]
fn test_early_stop_with_unused_budget_warns() {
    // b and c take 70ms, a needs 50 more: stop with 30ms unused
    let logs = select_with_captured_logs(100);

    assert!(logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("greedy walk stopped early with unused budget"), "{}", logs);
    assert!(logs.contains("remaining_ms=30"), "{}", logs);
    assert!(logs.contains("INFO"), "{}", logs);
    assert!(logs.contains("selection complete"), "{}", logs);
}

#[test]
fn test_exhausted_budget_does_not_warn() {
    let logs = select_with_captured_logs(70);

    assert!(!logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("selection complete"), "{}", logs);
}
