// Input checks shared by every selector.
//
// All checks run before any table is allocated or any sorting happens, so a
// failing call does no work and returns no partial result.

use super::SelectorError;
use crate::models::{LatencyTable, Transaction};

/// Reject negative budgets
pub(crate) fn validate_budget(budget_ms: i64) -> Result<u64, SelectorError> {
    u64::try_from(budget_ms).map_err(|_| {
        SelectorError::InvalidArgument(format!("budget must be non-negative, got {}", budget_ms))
    })
}

/// Reject negative or non-finite amounts
pub(crate) fn validate_amounts(transactions: &[Transaction]) -> Result<(), SelectorError> {
    for tx in transactions {
        let amount = tx.amount();
        if !amount.is_finite() || amount < 0.0 {
            return Err(SelectorError::InvalidArgument(format!(
                "transaction {} has invalid amount {}",
                tx.id(),
                amount
            )));
        }
    }
    Ok(())
}

/// Latency of one transaction
///
/// Unknown countries are `MissingLatencyEntry`, negative entries are
/// `InvalidArgument`. Zero is returned as-is; whether it is usable is up to
/// the caller.
pub(crate) fn resolve_latency(
    latencies: &LatencyTable,
    tx: &Transaction,
) -> Result<u64, SelectorError> {
    let latency = latencies
        .get(tx.country_code())
        .ok_or_else(|| SelectorError::MissingLatencyEntry {
            country_code: tx.country_code().to_string(),
            transaction_id: tx.id().to_string(),
        })?;

    u64::try_from(latency).map_err(|_| {
        SelectorError::InvalidArgument(format!(
            "latency for country code '{}' must be non-negative, got {}",
            tx.country_code(),
            latency
        ))
    })
}

/// Latencies for every transaction, in input order
pub(crate) fn resolve_latencies(
    latencies: &LatencyTable,
    transactions: &[Transaction],
) -> Result<Vec<u64>, SelectorError> {
    transactions
        .iter()
        .map(|tx| resolve_latency(latencies, tx))
        .collect()
}
