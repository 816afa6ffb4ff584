//! Transaction graph
//!
//! Adjacency structure mapping each sender account to its outgoing
//! transactions, ordered ascending by `(date, time)`. Built once from the
//! ingested ledger and read-only for the remainder of processing.
//!
//! # Determinism
//!
//! - Senders iterate in first-encountered order (the order the ledger was
//!   ingested in). This order drives cycle seeding and is part of the
//!   observable behavior of a detection run.
//! - Each sender's sequence is sorted ascending by `(date, time)` with a
//!   stable sort, so equal timestamps keep their input order. The tracer's
//!   strict-after rule means ties can never extend a path either way.

use crate::models::transaction::TransactionRecord;
use std::collections::HashMap;

/// Sender adjacency over the ingested ledger
///
/// # Example
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use roundtrip_detector_core::{TransactionGraph, TransactionRecord};
///
/// let tx = TransactionRecord::new(
///     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     "A".to_string(),
///     "B".to_string(),
///     100_000,
/// );
/// let graph = TransactionGraph::from_records(vec![tx]);
///
/// assert_eq!(graph.sender_count(), 1);
/// assert_eq!(graph.outgoing("A").unwrap().len(), 1);
/// assert!(graph.outgoing("B").is_none()); // never sends anything
/// ```
#[derive(Debug, Clone)]
pub struct TransactionGraph {
    /// Account ID → vertex index (stable, insertion order)
    account_to_index: HashMap<String, usize>,

    /// Vertex index → account ID (inverse mapping, insertion order)
    index_to_account: Vec<String>,

    /// Vertex index → outgoing transactions, sorted ascending by (date, time)
    outgoing: Vec<Vec<TransactionRecord>>,
}

impl TransactionGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            account_to_index: HashMap::new(),
            index_to_account: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Build the adjacency from a sequence of ledger records
    ///
    /// Groups records by sender, preserving the order senders are first
    /// encountered, then sorts each group ascending by `(date, time)`.
    /// Sorting is a correctness precondition for the tracer's pruning and
    /// is never assumed from the input.
    pub fn from_records(records: impl IntoIterator<Item = TransactionRecord>) -> Self {
        let mut graph = Self::new();

        for record in records {
            let idx = match graph.account_to_index.get(record.sender_account()) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.index_to_account.len();
                    graph
                        .account_to_index
                        .insert(record.sender_account().to_string(), idx);
                    graph
                        .index_to_account
                        .push(record.sender_account().to_string());
                    graph.outgoing.push(Vec::new());
                    idx
                }
            };
            graph.outgoing[idx].push(record);
        }

        // Stable sort: ties (identical date+time) keep input order.
        for sequence in &mut graph.outgoing {
            sequence.sort_by_key(|tx| (tx.date(), tx.time()));
        }

        graph
    }

    /// Outgoing transactions of an account, time-ordered
    ///
    /// Returns `None` when the account never appears as a sender — the
    /// explicit "no outgoing transactions" signal the tracer relies on.
    pub fn outgoing(&self, account: &str) -> Option<&[TransactionRecord]> {
        self.account_to_index
            .get(account)
            .map(|&idx| self.outgoing[idx].as_slice())
    }

    /// Sender accounts in first-encountered order
    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.index_to_account.iter().map(|account| account.as_str())
    }

    /// Number of distinct sender accounts
    pub fn sender_count(&self) -> usize {
        self.index_to_account.len()
    }

    /// Total number of transactions held by the graph
    pub fn transaction_count(&self) -> usize {
        self.outgoing.iter().map(|sequence| sequence.len()).sum()
    }

    /// Whether the graph holds no transactions
    pub fn is_empty(&self) -> bool {
        self.index_to_account.is_empty()
    }
}

impl Default for TransactionGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = TransactionGraph::new();
        assert_eq!(graph.sender_count(), 0);
        assert_eq!(graph.transaction_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.outgoing("A").is_none());
    }
}
