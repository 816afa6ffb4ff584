//! CSV ledger ingestion
//!
//! Reads SAML-D style transaction ledgers into [`TransactionRecord`]s and
//! builds the read-only [`TransactionGraph`]. Malformed rows fail fast here,
//! before the search ever sees a record: the core itself has no fatal
//! conditions.
//!
//! Expected columns: `Time`, `Date`, `Sender_account`, `Receiver_account`,
//! `Amount`, `Payment_currency`, `Received_currency`, `Payment_type`,
//! `Laundering_type`. Unknown columns are ignored.

use crate::graph::TransactionGraph;
use crate::models::transaction::TransactionRecord;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while ingesting a ledger
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),

    #[error("record at line {line}: unparseable amount {value:?}")]
    InvalidAmount { line: u64, value: String },

    #[error("record at line {line}: negative amount {amount}")]
    NegativeAmount { line: u64, amount: Decimal },

    #[error("record at line {line}: amount {amount} does not fit in cents")]
    AmountOutOfRange { line: u64, amount: Decimal },
}

/// One raw CSV row, named after the source columns
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: NaiveDate,

    #[serde(rename = "Time")]
    time: NaiveTime,

    #[serde(rename = "Sender_account")]
    sender_account: String,

    #[serde(rename = "Receiver_account")]
    receiver_account: String,

    // Kept as text and parsed with Decimal::from_str: the csv deserializer
    // would otherwise route decimal fields through f64.
    #[serde(rename = "Amount")]
    amount: String,

    #[serde(rename = "Payment_currency")]
    payment_currency: String,

    #[serde(rename = "Received_currency")]
    received_currency: String,

    #[serde(rename = "Payment_type")]
    payment_type: String,

    #[serde(rename = "Laundering_type")]
    laundering_type: String,
}

impl RawRecord {
    /// Validate the row and convert its amount to cents
    fn into_record(self, line: u64) -> Result<TransactionRecord, IngestError> {
        let amount: Decimal =
            self.amount
                .trim()
                .parse()
                .map_err(|_| IngestError::InvalidAmount {
                    line,
                    value: self.amount.clone(),
                })?;

        if amount < Decimal::ZERO {
            return Err(IngestError::NegativeAmount { line, amount });
        }

        let cents = (amount * Decimal::from(100)).round();
        let cents = cents
            .to_i64()
            .ok_or(IngestError::AmountOutOfRange { line, amount })?;

        Ok(
            TransactionRecord::new(
                self.date,
                self.time,
                self.sender_account,
                self.receiver_account,
                cents,
            )
            .with_currencies(self.payment_currency, self.received_currency)
            .with_payment_type(self.payment_type)
            .with_laundering_type(self.laundering_type),
        )
    }
}

/// Read all records from a CSV source, failing fast on the first bad row
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Header occupies line 1; data starts at line 2.
        let line = index as u64 + 2;
        let raw = row?;
        records.push(raw.into_record(line)?);
    }

    Ok(records)
}

/// Load all records from a CSV file on disk
pub fn load_records(path: &Path) -> Result<Vec<TransactionRecord>, IngestError> {
    let file = File::open(path)?;
    let records = read_records(file)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "ledger loaded"
    );
    Ok(records)
}

/// Load a CSV file and build the transaction graph from it
pub fn load_graph(path: &Path) -> Result<TransactionGraph, IngestError> {
    let records = load_records(path)?;
    let graph = TransactionGraph::from_records(records);
    info!(
        senders = graph.sender_count(),
        transactions = graph.transaction_count(),
        "transaction graph built"
    );
    Ok(graph)
}
