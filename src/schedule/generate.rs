//! Installment generation from a payment-term policy.
//!
//! The generator is a pure replacement: it is invoked whenever the
//! document's total, anchor date or selected policy changes, and the
//! resulting list wholesale replaces the previous one. Callers wanting to
//! preserve manual per-installment edits use
//! [`crate::schedule::carry_over_payment_fields`] as an explicit step.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Installment, percent_of, round_amount};

use super::policy::PaymentTermPolicy;
use super::titles::make_title;

/// Expands a document total into an ordered installment list.
///
/// Returns an empty list — meaning "not yet configured", never an error —
/// when the total is not strictly positive, the anchor date is absent, or
/// the policy has nothing to generate (a zero-count split or an empty
/// custom entry list).
///
/// # Arguments
///
/// * `total` - The document total to distribute
/// * `anchor_date` - The date offsets are measured from, if already set
/// * `policy` - The selected payment-term policy
/// * `title_base` - Base identifier for installment titles, may be empty
///
/// # Rounding
///
/// `FixedSplit` divides at full precision and rounds each installment to
/// two digits. Equal division may not reproduce the total exactly; the
/// generator does **not** absorb the remainder anywhere. The discrepancy is
/// surfaced by [`crate::schedule::reconcile`] and left to the user's
/// `adjustment` field.
///
/// # Example
///
/// ```
/// use distribution_engine::schedule::{PaymentTermPolicy, generate_installments};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let policy = PaymentTermPolicy::Immediate { offset_days: 30 };
/// let total = Decimal::from_str("1000.00").unwrap();
///
/// let installments = generate_installments(total, Some(anchor), &policy, "X");
/// assert_eq!(installments.len(), 1);
/// assert_eq!(installments[0].due_date, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
/// ```
pub fn generate_installments(
    total: Decimal,
    anchor_date: Option<NaiveDate>,
    policy: &PaymentTermPolicy,
    title_base: &str,
) -> Vec<Installment> {
    if total <= Decimal::ZERO {
        return Vec::new();
    }
    let Some(anchor) = anchor_date else {
        return Vec::new();
    };

    match policy {
        PaymentTermPolicy::Immediate { offset_days } => {
            let due_date = anchor + Duration::days(*offset_days);
            vec![Installment::new(
                1,
                make_title(title_base, 1, 1),
                due_date,
                round_amount(total),
            )]
        }
        PaymentTermPolicy::FixedSplit {
            count,
            interval_days,
        } => {
            if *count == 0 {
                return Vec::new();
            }
            let value = round_amount(total / Decimal::from(*count));
            (0..*count)
                .map(|i| {
                    let sequence = i + 1;
                    let due_date = anchor + Duration::days(i as i64 * interval_days);
                    Installment::new(
                        sequence,
                        make_title(title_base, sequence, *count as usize),
                        due_date,
                        value,
                    )
                })
                .collect()
        }
        PaymentTermPolicy::Custom { entries } => {
            if entries.is_empty() {
                return Vec::new();
            }
            let mut ordered: Vec<_> = entries.iter().collect();
            ordered.sort_by_key(|e| e.sequence);

            let count = ordered.len();
            ordered
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let sequence = (index + 1) as u32;
                    let due_date = anchor + Duration::days(entry.offset_days);
                    Installment::new(
                        sequence,
                        make_title(title_base, sequence, count),
                        due_date,
                        percent_of(total, entry.percent),
                    )
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::policy::CustomEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    /// GEN-001: immediate policy produces a single installment
    #[test]
    fn test_immediate_single_installment() {
        let policy = PaymentTermPolicy::Immediate { offset_days: 30 };
        let installments =
            generate_installments(dec("1000.00"), Some(date("2026-03-01")), &policy, "X");

        assert_eq!(installments.len(), 1);
        let first = &installments[0];
        assert_eq!(first.due_date, date("2026-03-31"));
        assert_eq!(first.value, dec("1000.00"));
        assert_eq!(first.total_value, dec("1000.00"));
        assert_eq!(first.title, "X-1/1");
    }

    /// GEN-002: fixed split divides exactly when possible
    #[test]
    fn test_fixed_split_exact_division() {
        let policy = PaymentTermPolicy::FixedSplit {
            count: 3,
            interval_days: 30,
        };
        let installments =
            generate_installments(dec("300.00"), Some(date("2026-03-01")), &policy, "X");

        assert_eq!(installments.len(), 3);
        for installment in &installments {
            assert_eq!(installment.value, dec("100.00"));
        }
        assert_eq!(installments[0].due_date, date("2026-03-01"));
        assert_eq!(installments[1].due_date, date("2026-03-31"));
        assert_eq!(installments[2].due_date, date("2026-04-30"));

        let sum: Decimal = installments.iter().map(|i| i.value).sum();
        assert_eq!(sum, dec("300.00"));
    }

    /// GEN-003: fixed split rounding remainder is not silently corrected
    #[test]
    fn test_fixed_split_rounding_remainder_left_unresolved() {
        let policy = PaymentTermPolicy::FixedSplit {
            count: 3,
            interval_days: 30,
        };
        let installments =
            generate_installments(dec("100.00"), Some(date("2026-03-01")), &policy, "X");

        for installment in &installments {
            assert_eq!(installment.value, dec("33.33"));
            assert_eq!(installment.adjustment, Decimal::ZERO);
        }

        let sum: Decimal = installments.iter().map(|i| i.value).sum();
        assert_eq!(sum, dec("99.99"));
        assert_ne!(sum, dec("100.00"));
    }

    /// GEN-004: custom entries apply percentages and offsets
    #[test]
    fn test_custom_entries() {
        let policy = PaymentTermPolicy::Custom {
            entries: vec![
                CustomEntry {
                    sequence: 1,
                    offset_days: 0,
                    percent: dec("50"),
                },
                CustomEntry {
                    sequence: 2,
                    offset_days: 30,
                    percent: dec("50"),
                },
            ],
        };
        let installments =
            generate_installments(dec("500.00"), Some(date("2026-03-01")), &policy, "X");

        assert_eq!(installments.len(), 2);
        assert_eq!(installments[0].value, dec("250.00"));
        assert_eq!(installments[0].due_date, date("2026-03-01"));
        assert_eq!(installments[1].value, dec("250.00"));
        assert_eq!(installments[1].due_date, date("2026-03-31"));
    }

    #[test]
    fn test_custom_entries_ordered_by_sequence() {
        let policy = PaymentTermPolicy::Custom {
            entries: vec![
                CustomEntry {
                    sequence: 2,
                    offset_days: 30,
                    percent: dec("70"),
                },
                CustomEntry {
                    sequence: 1,
                    offset_days: 0,
                    percent: dec("30"),
                },
            ],
        };
        let installments =
            generate_installments(dec("100.00"), Some(date("2026-03-01")), &policy, "NF");

        assert_eq!(installments[0].value, dec("30.00"));
        assert_eq!(installments[0].title, "NF-1/2");
        assert_eq!(installments[1].value, dec("70.00"));
        assert_eq!(installments[1].title, "NF-2/2");
    }

    #[test]
    fn test_zero_total_returns_empty() {
        let policy = PaymentTermPolicy::Immediate { offset_days: 0 };
        assert!(generate_installments(Decimal::ZERO, Some(date("2026-03-01")), &policy, "X").is_empty());
        assert!(generate_installments(dec("-5.00"), Some(date("2026-03-01")), &policy, "X").is_empty());
    }

    #[test]
    fn test_missing_anchor_returns_empty() {
        let policy = PaymentTermPolicy::Immediate { offset_days: 0 };
        assert!(generate_installments(dec("100.00"), None, &policy, "X").is_empty());
    }

    #[test]
    fn test_zero_count_split_treated_as_no_policy() {
        let policy = PaymentTermPolicy::FixedSplit {
            count: 0,
            interval_days: 30,
        };
        assert!(generate_installments(dec("100.00"), Some(date("2026-03-01")), &policy, "X").is_empty());
    }

    #[test]
    fn test_empty_custom_entries_treated_as_no_policy() {
        let policy = PaymentTermPolicy::Custom { entries: vec![] };
        assert!(generate_installments(dec("100.00"), Some(date("2026-03-01")), &policy, "X").is_empty());
    }

    #[test]
    fn test_empty_title_base_uses_plain_titles() {
        let policy = PaymentTermPolicy::FixedSplit {
            count: 2,
            interval_days: 15,
        };
        let installments =
            generate_installments(dec("200.00"), Some(date("2026-03-01")), &policy, "");

        assert_eq!(installments[0].title, "Installment 1");
        assert_eq!(installments[1].title, "Installment 2");
    }

    #[test]
    fn test_negative_offset_moves_due_date_back() {
        let policy = PaymentTermPolicy::Immediate { offset_days: -5 };
        let installments =
            generate_installments(dec("100.00"), Some(date("2026-03-10")), &policy, "X");

        assert_eq!(installments[0].due_date, date("2026-03-05"));
    }
}
