//! Transaction record model
//!
//! One row of the input ledger: a timestamped payment between two accounts.
//! Records are immutable once built; the graph and the cycle search only
//! ever read them.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single account-to-account transaction
///
/// The core fields (`date`, `time`, `sender_account`, `receiver_account`,
/// `amount`) drive the cycle search. The remaining fields are passthrough
/// metadata carried only for output.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use roundtrip_detector_core::TransactionRecord;
///
/// let tx = TransactionRecord::new(
///     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
///     "ACC_1".to_string(),
///     "ACC_2".to_string(),
///     150_000, // $1,500.00 in cents
/// )
/// .with_payment_type("Credit card".to_string());
///
/// assert_eq!(tx.sender_account(), "ACC_1");
/// assert_eq!(tx.amount(), 150_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date of the transaction
    date: NaiveDate,

    /// Time of day of the transaction
    time: NaiveTime,

    /// Sender account identifier (opaque string)
    sender_account: String,

    /// Receiver account identifier (opaque string)
    receiver_account: String,

    /// Transaction amount (i64 cents, non-negative)
    amount: i64,

    /// Currency the sender paid in (passthrough)
    payment_currency: String,

    /// Currency the receiver was credited in (passthrough)
    received_currency: String,

    /// Payment instrument label (passthrough)
    payment_type: String,

    /// Laundering-typology label from the source data (passthrough)
    laundering_type: String,
}

impl TransactionRecord {
    /// Create a new transaction record
    ///
    /// Passthrough metadata defaults to empty strings; use the `with_*`
    /// builders to attach it.
    ///
    /// # Panics
    /// Panics if `amount` is negative.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        sender_account: String,
        receiver_account: String,
        amount: i64,
    ) -> Self {
        assert!(amount >= 0, "amount must be non-negative");

        Self {
            date,
            time,
            sender_account,
            receiver_account,
            amount,
            payment_currency: String::new(),
            received_currency: String::new(),
            payment_type: String::new(),
            laundering_type: String::new(),
        }
    }

    /// Attach the currency pair (builder)
    pub fn with_currencies(mut self, payment_currency: String, received_currency: String) -> Self {
        self.payment_currency = payment_currency;
        self.received_currency = received_currency;
        self
    }

    /// Attach the payment instrument label (builder)
    pub fn with_payment_type(mut self, payment_type: String) -> Self {
        self.payment_type = payment_type;
        self
    }

    /// Attach the laundering-typology label (builder)
    pub fn with_laundering_type(mut self, laundering_type: String) -> Self {
        self.laundering_type = laundering_type;
        self
    }

    /// Transaction date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Transaction time of day
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Sender account identifier
    pub fn sender_account(&self) -> &str {
        &self.sender_account
    }

    /// Receiver account identifier
    pub fn receiver_account(&self) -> &str {
        &self.receiver_account
    }

    /// Amount in cents
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency the sender paid in
    pub fn payment_currency(&self) -> &str {
        &self.payment_currency
    }

    /// Currency the receiver was credited in
    pub fn received_currency(&self) -> &str {
        &self.received_currency
    }

    /// Payment instrument label
    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    /// Laundering-typology label
    pub fn laundering_type(&self) -> &str {
        &self.laundering_type
    }

    /// Whether this record happened strictly after the given timestamp
    ///
    /// Equal timestamps are NOT strictly after; the search treats them as
    /// ineligible continuations.
    ///
    /// # Example
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use roundtrip_detector_core::TransactionRecord;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
    /// let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    /// let tx = TransactionRecord::new(date, time, "A".into(), "B".into(), 100);
    ///
    /// assert!(!tx.is_strictly_after(date, time)); // equal timestamp
    /// ```
    pub fn is_strictly_after(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date > date || (self.date == date && self.time > time)
    }
}
