//! Fan-in ("smurfing") detection
//!
//! Flags accounts that receive funds from many distinct senders within a
//! short window above a volume threshold. This is a pure set-aggregation
//! query over the ledger; it never touches the transaction graph and is
//! independent of the cycle search.

use crate::models::transaction::TransactionRecord;
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

/// Thresholds for the fan-in query
///
/// Defaults mirror the reference ruleset: UK-pound transfers, strictly more
/// than 10 distinct senders, within 30 days (43 200 minutes, inclusive),
/// totalling strictly more than £100,000.
#[derive(Debug, Clone)]
pub struct SmurfingConfig {
    /// Currency both legs of a record must be denominated in
    pub currency: String,

    /// Distinct-sender count a receiver must exceed to be flagged
    pub min_distinct_senders: usize,

    /// Maximum first-to-last span in minutes (inclusive)
    pub max_window_minutes: i64,

    /// Total received amount (cents) a receiver must exceed to be flagged
    pub min_total_amount: i64,
}

impl Default for SmurfingConfig {
    fn default() -> Self {
        Self {
            currency: "UK pounds".to_string(),
            min_distinct_senders: 10,
            max_window_minutes: 43_200,
            min_total_amount: 10_000_000,
        }
    }
}

/// A receiver account flagged by the fan-in query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmurfingSuspect {
    receiver_account: String,
    sender_count: usize,
    total_amount: i64,
    duration_minutes: i64,
    transactions: Vec<TransactionRecord>,
}

impl SmurfingSuspect {
    /// Flagged receiver account
    pub fn receiver_account(&self) -> &str {
        &self.receiver_account
    }

    /// Number of distinct senders observed
    pub fn sender_count(&self) -> usize {
        self.sender_count
    }

    /// Total amount received (cents)
    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    /// Minutes between the earliest and latest inbound transaction
    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// The inbound transactions that triggered the flag, in ledger order
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Human-readable window span: `N days`, `N hours` or `N minutes`
    pub fn readable_duration(&self) -> String {
        readable_duration(self.duration_minutes)
    }
}

fn readable_duration(minutes: i64) -> String {
    if minutes >= 1_440 {
        format!("{} days", minutes / 1_440)
    } else if minutes >= 60 {
        format!("{} hours", minutes / 60)
    } else {
        format!("{} minutes", minutes)
    }
}

/// Run the fan-in aggregation over the ledger
///
/// Records whose currency pair does not match `config.currency` on both
/// legs are ignored. Suspects are returned sorted by receiver account
/// ascending; each suspect's transactions keep their ledger order.
pub fn detect_smurfing(
    records: &[TransactionRecord],
    config: &SmurfingConfig,
) -> Vec<SmurfingSuspect> {
    let mut by_receiver: HashMap<&str, Vec<&TransactionRecord>> = HashMap::new();

    for record in records {
        if record.payment_currency() != config.currency
            || record.received_currency() != config.currency
        {
            continue;
        }
        by_receiver
            .entry(record.receiver_account())
            .or_default()
            .push(record);
    }

    let mut suspects = Vec::new();

    for (receiver, inbound) in by_receiver {
        let senders: HashSet<&str> = inbound.iter().map(|tx| tx.sender_account()).collect();
        if senders.len() <= config.min_distinct_senders {
            continue;
        }

        let total_amount: i64 = inbound.iter().map(|tx| tx.amount()).sum();
        if total_amount <= config.min_total_amount {
            continue;
        }

        let timestamps: Vec<NaiveDateTime> = inbound
            .iter()
            .map(|tx| tx.date().and_time(tx.time()))
            .collect();
        let first = timestamps.iter().min().copied().unwrap_or_default();
        let last = timestamps.iter().max().copied().unwrap_or_default();
        let duration_minutes = (last - first).num_minutes();
        if duration_minutes > config.max_window_minutes {
            continue;
        }

        suspects.push(SmurfingSuspect {
            receiver_account: receiver.to_string(),
            sender_count: senders.len(),
            total_amount,
            duration_minutes,
            transactions: inbound.into_iter().cloned().collect(),
        });
    }

    suspects.sort_by(|a, b| a.receiver_account.cmp(&b.receiver_account));
    suspects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_duration_units() {
        assert_eq!(readable_duration(30), "30 minutes");
        assert_eq!(readable_duration(59), "59 minutes");
        assert_eq!(readable_duration(60), "1 hours");
        assert_eq!(readable_duration(1_439), "23 hours");
        assert_eq!(readable_duration(1_440), "1 days");
        assert_eq!(readable_duration(2_880), "2 days");
    }
}
