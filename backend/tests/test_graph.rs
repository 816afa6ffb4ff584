//! Tests for the TransactionGraph adjacency structure

use chrono::{NaiveDate, NaiveTime};
use roundtrip_detector_core::{TransactionGraph, TransactionRecord};

fn tx(day: u32, time: &str, sender: &str, receiver: &str, amount: i64) -> TransactionRecord {
    TransactionRecord::new(
        NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
        time.parse().unwrap(),
        sender.to_string(),
        receiver.to_string(),
        amount,
    )
}

#[test]
fn test_groups_by_sender() {
    let graph = TransactionGraph::from_records(vec![
        tx(1, "09:00:00", "A", "B", 100),
        tx(2, "09:00:00", "B", "C", 200),
        tx(3, "09:00:00", "A", "C", 300),
    ]);

    assert_eq!(graph.sender_count(), 2);
    assert_eq!(graph.transaction_count(), 3);
    assert_eq!(graph.outgoing("A").unwrap().len(), 2);
    assert_eq!(graph.outgoing("B").unwrap().len(), 1);
}

#[test]
fn test_missing_account_has_no_outgoing() {
    let graph = TransactionGraph::from_records(vec![tx(1, "09:00:00", "A", "B", 100)]);

    // B only ever receives; it has no adjacency entry.
    assert!(graph.outgoing("B").is_none());
    assert!(graph.outgoing("Z").is_none());
}

#[test]
fn test_outgoing_sorted_by_date_then_time() {
    let graph = TransactionGraph::from_records(vec![
        tx(5, "08:00:00", "A", "B", 1),
        tx(1, "23:00:00", "A", "C", 2),
        tx(5, "07:59:59", "A", "D", 3),
        tx(2, "00:00:00", "A", "E", 4),
    ]);

    let amounts: Vec<i64> = graph
        .outgoing("A")
        .unwrap()
        .iter()
        .map(|t| t.amount())
        .collect();
    assert_eq!(amounts, vec![2, 4, 3, 1]);
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let graph = TransactionGraph::from_records(vec![
        tx(1, "10:00:00", "A", "B", 1),
        tx(1, "10:00:00", "A", "C", 2),
        tx(1, "10:00:00", "A", "D", 3),
    ]);

    let amounts: Vec<i64> = graph
        .outgoing("A")
        .unwrap()
        .iter()
        .map(|t| t.amount())
        .collect();
    assert_eq!(amounts, vec![1, 2, 3]);
}

#[test]
fn test_senders_iterate_in_first_encountered_order() {
    let graph = TransactionGraph::from_records(vec![
        tx(1, "09:00:00", "C", "A", 1),
        tx(1, "10:00:00", "A", "B", 2),
        tx(1, "11:00:00", "C", "B", 3),
        tx(1, "12:00:00", "B", "C", 4),
    ]);

    let senders: Vec<&str> = graph.senders().collect();
    assert_eq!(senders, vec!["C", "A", "B"]);
}
