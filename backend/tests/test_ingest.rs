//! Tests for CSV ledger ingestion
//!
//! Malformed input must fail fast here, before the search sees a record.

use chrono::{NaiveDate, NaiveTime};
use roundtrip_detector_core::{read_records, IngestError};

const HEADER: &str = "Time,Date,Sender_account,Receiver_account,Amount,Payment_currency,Received_currency,Sender_bank_location,Receiver_bank_location,Payment_type,Is_laundering,Laundering_type";

fn ledger(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out
}

#[test]
fn test_parses_well_formed_row() {
    let csv = ledger(&[
        "10:35:19,2022-10-07,8724731955,2769355426,1459.15,UK pounds,UK pounds,UK,UK,Cash Deposit,0,Normal_Cash_Deposits",
    ]);

    let records = read_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);

    let tx = &records[0];
    assert_eq!(tx.date(), NaiveDate::from_ymd_opt(2022, 10, 7).unwrap());
    assert_eq!(tx.time(), NaiveTime::from_hms_opt(10, 35, 19).unwrap());
    assert_eq!(tx.sender_account(), "8724731955");
    assert_eq!(tx.receiver_account(), "2769355426");
    assert_eq!(tx.amount(), 145_915); // cents
    assert_eq!(tx.payment_currency(), "UK pounds");
    assert_eq!(tx.received_currency(), "UK pounds");
    assert_eq!(tx.payment_type(), "Cash Deposit");
    assert_eq!(tx.laundering_type(), "Normal_Cash_Deposits");
}

#[test]
fn test_extra_columns_ignored() {
    // Sender_bank_location / Receiver_bank_location / Is_laundering are not
    // modeled and must not break ingestion.
    let csv = ledger(&[
        "08:00:00,2022-01-01,1,2,10.00,UK pounds,UK pounds,UK,UK,Cheque,0,None",
        "09:00:00,2022-01-01,2,3,20.50,UK pounds,UK pounds,UK,UK,Cheque,0,None",
    ]);

    let records = read_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].amount(), 2_050);
}

#[test]
fn test_negative_amount_fails_fast() {
    let csv = ledger(&[
        "08:00:00,2022-01-01,1,2,10.00,UK pounds,UK pounds,UK,UK,Cheque,0,None",
        "09:00:00,2022-01-01,2,3,-5.00,UK pounds,UK pounds,UK,UK,Cheque,0,None",
    ]);

    let err = read_records(csv.as_bytes()).unwrap_err();
    match err {
        IngestError::NegativeAmount { line, .. } => assert_eq!(line, 3),
        other => panic!("expected NegativeAmount, got {other:?}"),
    }
}

#[test]
fn test_unparseable_amount_fails_fast() {
    let csv = ledger(&[
        "08:00:00,2022-01-01,1,2,not-a-number,UK pounds,UK pounds,UK,UK,Cheque,0,None",
    ]);

    assert!(matches!(
        read_records(csv.as_bytes()).unwrap_err(),
        IngestError::InvalidAmount { line: 2, .. }
    ));
}

#[test]
fn test_unparseable_date_fails_fast() {
    let csv = ledger(&[
        "08:00:00,07/10/2022,1,2,10.00,UK pounds,UK pounds,UK,UK,Cheque,0,None",
    ]);

    assert!(matches!(
        read_records(csv.as_bytes()).unwrap_err(),
        IngestError::Csv(_)
    ));
}

#[test]
fn test_missing_required_column_fails() {
    let csv = "Time,Date,Sender_account\n08:00:00,2022-01-01,1";

    assert!(matches!(
        read_records(csv.as_bytes()).unwrap_err(),
        IngestError::Csv(_)
    ));
}

#[test]
fn test_empty_ledger_yields_no_records() {
    let records = read_records(HEADER.as_bytes()).unwrap();
    assert!(records.is_empty());
}
