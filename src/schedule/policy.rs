//! Payment-term policy types.
//!
//! A payment-term policy describes how a document's total expands into a
//! schedule of dated installments. Policies come from an external catalog;
//! the engine only interprets them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rule expanding a total into installments.
///
/// Serialized with an internal `type` tag so catalog records map onto the
/// variants directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentTermPolicy {
    /// A single installment due `offset_days` after the anchor date.
    Immediate {
        /// Days between the anchor date and the due date.
        offset_days: i64,
    },
    /// `count` equal installments spaced `interval_days` apart.
    FixedSplit {
        /// Number of installments. Zero means "no policy selected".
        count: u32,
        /// Days between successive due dates, starting at the anchor.
        interval_days: i64,
    },
    /// An explicit list of percentage/offset entries.
    Custom {
        /// The entries, applied in `sequence` order.
        entries: Vec<CustomEntry>,
    },
}

/// One entry of a custom payment-term policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEntry {
    /// Position of this entry in the schedule.
    pub sequence: u32,
    /// Days between the anchor date and this entry's due date.
    pub offset_days: i64,
    /// Share of the total, in percent.
    pub percent: Decimal,
}
