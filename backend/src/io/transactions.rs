//! Transaction file reader
//!
//! Expects a header row with at least `id`, `amount` and
//! `bank_country_code`. Other columns are ignored and surrounding whitespace
//! is trimmed.

use super::LoadError;
use crate::models::Transaction;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse transactions from any reader
///
/// # Example
/// ```
/// use transaction_prioritizer_core::io::read_transactions;
///
/// let data = "id,amount,bank_country_code\ntx_1,100.50,us\ntx_2,20,gb\n";
/// let transactions = read_transactions(data.as_bytes()).unwrap();
///
/// assert_eq!(transactions.len(), 2);
/// assert_eq!(transactions[0].amount(), 100.50);
/// assert_eq!(transactions[1].country_code(), "gb");
/// ```
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut transactions = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let tx: Transaction = record.deserialize(Some(&headers))?;

        if tx.id().is_empty() {
            return Err(LoadError::InvalidRecord {
                line,
                reason: "empty id".to_string(),
            });
        }
        if tx.country_code().is_empty() {
            return Err(LoadError::InvalidRecord {
                line,
                reason: format!("transaction {} has an empty bank_country_code", tx.id()),
            });
        }

        transactions.push(tx);
    }

    debug!(count = transactions.len(), "transactions loaded");
    Ok(transactions)
}

/// Parse transactions from a file
pub fn read_transactions_from_path(path: impl AsRef<Path>) -> Result<Vec<Transaction>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    read_transactions(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_columns_and_whitespace() {
        let data = "id, amount ,bank_country_code,note\n a , 1.25 , us ,hello\n";
        let txs = read_transactions(data.as_bytes()).unwrap();

        assert_eq!(txs, vec![Transaction::new("a", 1.25, "us")]);
    }

    #[test]
    fn test_empty_country_code_reports_line() {
        let data = "id,amount,bank_country_code\na,1,us\nb,2,\n";
        let err = read_transactions(data.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_amount_is_csv_error() {
        let data = "id,amount,bank_country_code\na,lots,us\n";

        assert!(matches!(
            read_transactions(data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn test_header_only() {
        let data = "id,amount,bank_country_code\n";

        assert!(read_transactions(data.as_bytes()).unwrap().is_empty());
    }
}
