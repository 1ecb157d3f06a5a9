//! Apportionment entry model.
//!
//! An apportionment (rateio) splits a document's total across multiple
//! destination buckets — accounting accounts or cost centers. Each entry
//! keeps a value and a percent view of the same share; the mutual
//! derivation rules live in [`crate::apportionment::Apportionment`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One destination bucket's share of an apportioned total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApportionmentEntry {
    /// Unique identity of this entry within its list.
    pub id: Uuid,
    /// Reference to the destination bucket; `None` until selected.
    pub bucket_ref: Option<String>,
    /// Display label of the destination bucket.
    pub bucket_label: String,
    /// The monetary share assigned to this bucket.
    pub value: Decimal,
    /// The percentage view of the same share.
    pub percent: Decimal,
}

impl ApportionmentEntry {
    /// Creates an empty entry with no bucket and zero value/percent.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            bucket_ref: None,
            bucket_label: String::new(),
            value: Decimal::ZERO,
            percent: Decimal::ZERO,
        }
    }
}
