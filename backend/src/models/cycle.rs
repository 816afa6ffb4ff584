//! Detected cycle model
//!
//! A cycle is a closed round-trip path through the transaction graph. It is
//! produced by the tracer, collected by the orchestrator in discovery order,
//! and immutable thereafter.

use crate::models::transaction::TransactionRecord;

/// A closed round-trip path of transactions
///
/// Invariants (asserted at construction):
/// - hop count is strictly greater than 2
/// - the last transaction's receiver equals the first transaction's sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Transactions in hop order, seed first, closing hop last
    transactions: Vec<TransactionRecord>,
}

impl Cycle {
    /// Wrap a closed path returned by the tracer
    ///
    /// # Panics
    /// Panics if the path has 2 or fewer hops or does not close on the
    /// first transaction's sender.
    pub fn new(transactions: Vec<TransactionRecord>) -> Self {
        assert!(
            transactions.len() > 2,
            "a cycle must have more than two hops"
        );
        assert_eq!(
            transactions.last().map(|tx| tx.receiver_account()),
            transactions.first().map(|tx| tx.sender_account()),
            "a cycle must close on its start account"
        );

        Self { transactions }
    }

    /// Transactions in hop order
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Number of hops in the cycle
    pub fn hop_count(&self) -> usize {
        self.transactions.len()
    }

    /// Account the cycle starts from and returns to
    pub fn start_account(&self) -> &str {
        self.transactions[0].sender_account()
    }

    /// Amount of the seed transaction (cents)
    pub fn seed_amount(&self) -> i64 {
        self.transactions[0].amount()
    }

    /// Amount of the closing hop (cents)
    pub fn closing_amount(&self) -> i64 {
        self.transactions[self.transactions.len() - 1].amount()
    }

    /// Consume the cycle, yielding its transactions
    pub fn into_transactions(self) -> Vec<TransactionRecord> {
        self.transactions
    }
}
