//! Tabular output for detected cycles and smurfing suspects
//!
//! Flattens the nested results into flat CSV rows with derived bookkeeping
//! columns. Cycle rows are tagged with a 1-based cycle index, the cycle's
//! hop count and each transaction's 1-based position within the cycle.
//! Suspect rows join each inbound transaction with its receiver's
//! aggregates.

use crate::models::cycle::Cycle;
use crate::smurfing::SmurfingSuspect;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while writing result files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize row: {0}")]
    Csv(#[from] csv::Error),
}

/// One flattened cycle transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Time")]
    pub time: NaiveTime,

    #[serde(rename = "Sender_account")]
    pub sender_account: String,

    #[serde(rename = "Receiver_account")]
    pub receiver_account: String,

    #[serde(rename = "Amount")]
    pub amount: String,

    #[serde(rename = "Payment_currency")]
    pub payment_currency: String,

    #[serde(rename = "Received_currency")]
    pub received_currency: String,

    #[serde(rename = "Payment_type")]
    pub payment_type: String,

    #[serde(rename = "Laundering_type")]
    pub laundering_type: String,

    /// 1-based index of the cycle this row belongs to
    #[serde(rename = "Cycle_ID")]
    pub cycle_id: usize,

    /// Hop count of the whole cycle
    #[serde(rename = "Cycle_Length")]
    pub cycle_length: usize,

    /// 1-based position of this transaction within the cycle
    #[serde(rename = "Hop_Number")]
    pub hop_number: usize,
}

/// One flattened smurfing-suspect transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmurfingRow {
    #[serde(rename = "Receiver_account")]
    pub receiver_account: String,

    #[serde(rename = "Duration")]
    pub duration: String,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Time")]
    pub time: NaiveTime,

    #[serde(rename = "Total_amount")]
    pub total_amount: String,

    #[serde(rename = "Sender_account")]
    pub sender_account: String,

    #[serde(rename = "Sender_count")]
    pub sender_count: usize,

    #[serde(rename = "Payment_currency")]
    pub payment_currency: String,

    #[serde(rename = "Received_currency")]
    pub received_currency: String,

    #[serde(rename = "Amount")]
    pub amount: String,

    #[serde(rename = "Laundering_type")]
    pub laundering_type: String,

    #[serde(rename = "Payment_type")]
    pub payment_type: String,
}

/// Render a cents amount back to a decimal string, e.g. `1459.15`
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Flatten cycles into rows tagged with cycle id, length and hop number
pub fn flatten_cycles(cycles: &[Cycle]) -> Vec<CycleRow> {
    let mut rows = Vec::new();

    for (cycle_index, cycle) in cycles.iter().enumerate() {
        for (hop_index, tx) in cycle.transactions().iter().enumerate() {
            rows.push(CycleRow {
                date: tx.date(),
                time: tx.time(),
                sender_account: tx.sender_account().to_string(),
                receiver_account: tx.receiver_account().to_string(),
                amount: format_cents(tx.amount()),
                payment_currency: tx.payment_currency().to_string(),
                received_currency: tx.received_currency().to_string(),
                payment_type: tx.payment_type().to_string(),
                laundering_type: tx.laundering_type().to_string(),
                cycle_id: cycle_index + 1,
                cycle_length: cycle.hop_count(),
                hop_number: hop_index + 1,
            });
        }
    }

    rows
}

/// Flatten suspects into one row per inbound transaction
pub fn flatten_suspects(suspects: &[SmurfingSuspect]) -> Vec<SmurfingRow> {
    let mut rows = Vec::new();

    for suspect in suspects {
        for tx in suspect.transactions() {
            rows.push(SmurfingRow {
                receiver_account: suspect.receiver_account().to_string(),
                duration: suspect.readable_duration(),
                date: tx.date(),
                time: tx.time(),
                total_amount: format_cents(suspect.total_amount()),
                sender_account: tx.sender_account().to_string(),
                sender_count: suspect.sender_count(),
                payment_currency: tx.payment_currency().to_string(),
                received_currency: tx.received_currency().to_string(),
                amount: format_cents(tx.amount()),
                laundering_type: tx.laundering_type().to_string(),
                payment_type: tx.payment_type().to_string(),
            });
        }
    }

    rows
}

/// Write flattened cycles as CSV
///
/// When no cycles were detected nothing is written at all, mirroring the
/// skip-on-empty behavior of the reference pipeline.
pub fn write_cycles<W: Write>(cycles: &[Cycle], writer: W) -> Result<(), ExportError> {
    if cycles.is_empty() {
        info!("no cycles detected, skipping export");
        return Ok(());
    }

    let rows = flatten_cycles(cycles);
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    info!(
        cycles = cycles.len(),
        transactions = rows.len(),
        "cycles exported"
    );
    Ok(())
}

/// Write flattened cycles to a file; no file is created when empty
pub fn write_cycles_to_path(cycles: &[Cycle], path: &Path) -> Result<(), ExportError> {
    if cycles.is_empty() {
        info!("no cycles detected, skipping export");
        return Ok(());
    }
    write_cycles(cycles, File::create(path)?)
}

/// Write flattened suspects as CSV (empty output when nothing was flagged)
pub fn write_smurfing<W: Write>(
    suspects: &[SmurfingSuspect],
    writer: W,
) -> Result<(), ExportError> {
    let rows = flatten_suspects(suspects);
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    info!(
        suspects = suspects.len(),
        transactions = rows.len(),
        "smurfing suspects exported"
    );
    Ok(())
}

/// Write flattened suspects to a file
pub fn write_smurfing_to_path(
    suspects: &[SmurfingSuspect],
    path: &Path,
) -> Result<(), ExportError> {
    write_smurfing(suspects, File::create(path)?)
}
