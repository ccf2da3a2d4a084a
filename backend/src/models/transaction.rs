//! Transaction model
//!
//! Represents a single payment waiting to be processed.
//! Each transaction has:
//! - An opaque identifier (as supplied by the upstream feed)
//! - Amount in a single currency unit (the engine is currency-agnostic)
//! - Country code of the originating bank, used to look up processing latency
//!
//! Transactions are immutable once loaded. Selectors never create or mutate
//! them, they only hand back references to the chosen subset.

use serde::{Deserialize, Serialize};

/// A payment transaction tagged with its originating bank's country
///
/// # Example
/// ```
/// use transaction_prioritizer_core::Transaction;
///
/// let tx = Transaction::new("tx_001", 125.50, "us");
/// assert_eq!(tx.id(), "tx_001");
/// assert_eq!(tx.amount(), 125.50);
/// assert_eq!(tx.country_code(), "us");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque transaction identifier
    id: String,

    /// Transaction amount (non-negative for valid input)
    amount: f64,

    /// Country code of the originating bank
    #[serde(rename = "bank_country_code")]
    country_code: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// No validation happens here: amounts are checked by the selectors so
    /// that out-of-contract input surfaces as a selection error rather than
    /// a panic at load time.
    pub fn new(id: impl Into<String>, amount: f64, country_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            country_code: country_code.into(),
        }
    }

    /// Get transaction ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get transaction amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get originating bank's country code
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}
