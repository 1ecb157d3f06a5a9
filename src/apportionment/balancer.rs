//! Apportionment list state and mutation operations.
//!
//! An [`Apportionment`] holds a fixed monetary target and a freely editable
//! list of entries. Value and percent are two views of the same share with
//! no canonical source of truth: the last-edited field wins and the other
//! is recomputed fresh from it, for that entry only. No edit ever
//! redistributes the remaining entries.
//!
//! A document instantiates this twice with independent state — once for
//! accounting-account distribution and once for cost-center distribution.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{ApportionmentEntry, percent_of, percent_share, round_amount};

/// A mutable bucket distribution against a fixed target total.
///
/// # Example
///
/// ```
/// use distribution_engine::apportionment::Apportionment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut apportionment = Apportionment::new(Decimal::from_str("1000.00").unwrap());
/// let id = apportionment.add_entry();
/// apportionment.set_percent(id, Decimal::from_str("25").unwrap());
/// assert_eq!(
///     apportionment.entries()[0].value,
///     Decimal::from_str("250.00").unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Apportionment {
    target: Decimal,
    entries: Vec<ApportionmentEntry>,
}

impl Apportionment {
    /// Creates an empty apportionment against the given target total.
    pub fn new(target: Decimal) -> Self {
        Self {
            target: round_amount(target),
            entries: Vec::new(),
        }
    }

    /// The target total this distribution must reproduce.
    pub fn target(&self) -> Decimal {
        self.target
    }

    /// The current entries, in insertion order.
    pub fn entries(&self) -> &[ApportionmentEntry] {
        &self.entries
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry with no bucket and zero value/percent.
    pub fn add_entry(&mut self) -> Uuid {
        let entry = ApportionmentEntry::empty();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes an entry by identity without redistributing the remainder.
    /// Returns whether anything was removed.
    pub fn remove_entry(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    /// Assigns the destination bucket for one entry. Value and percent are
    /// unaffected. Returns whether the entry exists.
    pub fn set_bucket(&mut self, id: Uuid, bucket_ref: &str, bucket_label: &str) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.bucket_ref = Some(bucket_ref.to_string());
                entry.bucket_label = bucket_label.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets an entry's value and rederives its percent from the target.
    ///
    /// With a non-positive target the percent is left at zero. Returns
    /// whether the entry exists.
    pub fn set_value(&mut self, id: Uuid, new_value: Decimal) -> bool {
        let target = self.target;
        match self.entry_mut(id) {
            Some(entry) => {
                entry.value = round_amount(new_value);
                entry.percent = percent_share(entry.value, target);
                true
            }
            None => false,
        }
    }

    /// Sets an entry's percent and rederives its value from the target.
    ///
    /// With a non-positive target the value is left unchanged. Returns
    /// whether the entry exists.
    pub fn set_percent(&mut self, id: Uuid, new_percent: Decimal) -> bool {
        let target = self.target;
        match self.entry_mut(id) {
            Some(entry) => {
                entry.percent = round_amount(new_percent);
                if target > Decimal::ZERO {
                    entry.value = percent_of(target, entry.percent);
                }
                true
            }
            None => false,
        }
    }

    /// The rounded sum of entry values.
    ///
    /// Each addend is already rounded, so the sum matches what the user
    /// sees per entry exactly.
    pub fn current_sum(&self) -> Decimal {
        round_amount(self.entries.iter().map(|e| round_amount(e.value)).sum())
    }

    /// Whether the entry values reproduce the target exactly.
    ///
    /// Exact equality on rounded decimals, not within-epsilon.
    pub fn is_balanced(&self) -> bool {
        self.current_sum() == self.target
    }

    /// `current_sum() - target`; negative means a deficit.
    pub fn difference(&self) -> Decimal {
        self.current_sum() - self.target
    }

    /// Empties the entry list.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry_mut(&mut self, id: Uuid) -> Option<&mut ApportionmentEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}
