//! Installment model and related status types.
//!
//! An installment is one scheduled partial payment of a document's total,
//! with its own due/payment/clearing dates and a user-driven status. The
//! document-level status derived from a list of installments lives in
//! [`crate::schedule::compute_status`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The payment status of a single installment.
///
/// Transitions are user-driven; the engine never changes an installment's
/// status on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    /// Not yet paid.
    Pending,
    /// Paid by the counterparty.
    Paid,
    /// Past its due date without payment.
    Overdue,
    /// Cleared/settled in the bank account.
    Settled,
}

/// The aggregate status of a document derived from its installments.
///
/// `Cancelled` is only ever set by explicit user action and is never
/// produced by [`crate::schedule::compute_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// No installment has been paid yet (or there are none).
    Pending,
    /// Some, but not all, installments are paid.
    Partial,
    /// Every installment is paid.
    Paid,
    /// Cancelled by the user.
    Cancelled,
}

/// One scheduled partial payment of a document's total.
///
/// Invariant: `total_value` is always the arithmetic sum of `value` and
/// `adjustment`. Use [`Installment::set_value`] and
/// [`Installment::set_adjustment`] to keep it consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// Unique identity of this installment within its list.
    pub id: Uuid,
    /// 1-based position used for titles and carry-over matching.
    pub sequence: u32,
    /// Display title, e.g. `"NF-1042-2/3"`.
    pub title: String,
    /// The date payment falls due.
    pub due_date: NaiveDate,
    /// The date payment was actually made, once known.
    pub payment_date: Option<NaiveDate>,
    /// The date the payment cleared, once known.
    pub clearing_date: Option<NaiveDate>,
    /// Reference to the payment method chosen by the user.
    pub payment_method_ref: Option<String>,
    /// Reference to the bank account chosen by the user.
    pub bank_account_ref: Option<String>,
    /// The scheduled value of this installment.
    pub value: Decimal,
    /// Signed manual delta entered by the user (default zero).
    pub adjustment: Decimal,
    /// Always `value + adjustment`.
    pub total_value: Decimal,
    /// The payment status of this installment.
    pub status: InstallmentStatus,
}

impl Installment {
    /// Creates a pending installment with no manual adjustment.
    pub fn new(sequence: u32, title: String, due_date: NaiveDate, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            title,
            due_date,
            payment_date: None,
            clearing_date: None,
            payment_method_ref: None,
            bank_account_ref: None,
            value,
            adjustment: Decimal::ZERO,
            total_value: value,
            status: InstallmentStatus::Pending,
        }
    }

    /// Sets the scheduled value and recomputes `total_value`.
    pub fn set_value(&mut self, value: Decimal) {
        self.value = value;
        self.total_value = self.value + self.adjustment;
    }

    /// Sets the manual adjustment and recomputes `total_value`.
    pub fn set_adjustment(&mut self, adjustment: Decimal) {
        self.adjustment = adjustment;
        self.total_value = self.value + self.adjustment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_new_installment_total_equals_value() {
        let installment = Installment::new(1, "X-1/1".to_string(), date("2026-03-01"), dec("100.00"));

        assert_eq!(installment.total_value, dec("100.00"));
        assert_eq!(installment.adjustment, Decimal::ZERO);
        assert_eq!(installment.status, InstallmentStatus::Pending);
        assert!(installment.payment_date.is_none());
        assert!(installment.payment_method_ref.is_none());
    }

    #[test]
    fn test_set_adjustment_recomputes_total() {
        let mut installment =
            Installment::new(1, "X-1/3".to_string(), date("2026-03-01"), dec("33.33"));

        installment.set_adjustment(dec("0.01"));
        assert_eq!(installment.total_value, dec("33.34"));

        installment.set_adjustment(dec("-0.03"));
        assert_eq!(installment.total_value, dec("33.30"));
    }

    #[test]
    fn test_set_value_preserves_adjustment() {
        let mut installment =
            Installment::new(2, "X-2/3".to_string(), date("2026-04-01"), dec("33.33"));
        installment.set_adjustment(dec("0.01"));

        installment.set_value(dec("50.00"));
        assert_eq!(installment.adjustment, dec("0.01"));
        assert_eq!(installment.total_value, dec("50.01"));
    }

    #[test]
    fn test_installment_status_serialization() {
        let json = serde_json::to_string(&InstallmentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&InstallmentStatus::Settled).unwrap();
        assert_eq!(json, "\"settled\"");

        let status: InstallmentStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(status, InstallmentStatus::Overdue);
    }

    #[test]
    fn test_document_status_serialization() {
        let json = serde_json::to_string(&DocumentStatus::Partial).unwrap();
        assert_eq!(json, "\"partial\"");

        let status: DocumentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, DocumentStatus::Cancelled);
    }

    #[test]
    fn test_installment_serialization_round_trip() {
        let installment =
            Installment::new(1, "NF-1042-1/2".to_string(), date("2026-03-15"), dec("250.00"));

        let json = serde_json::to_string(&installment).unwrap();
        assert!(json.contains("\"title\":\"NF-1042-1/2\""));
        assert!(json.contains("\"due_date\":\"2026-03-15\""));
        assert!(json.contains("\"value\":\"250.00\""));

        let back: Installment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, installment);
    }
}
