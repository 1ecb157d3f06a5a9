//! Manual installment list editing.
//!
//! Users may append a default installment or remove one by identity.
//! Neither operation regenerates titles; renumbering is the separate,
//! explicitly invoked [`crate::schedule::regenerate_titles`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Installment;

use super::titles::make_title;

/// Appends a zero-value installment due today and returns its id.
pub fn append_manual_installment(installments: &mut Vec<Installment>, today: NaiveDate) -> Uuid {
    let sequence = installments.len() as u32 + 1;
    let installment = Installment::new(sequence, make_title("", sequence, 0), today, Decimal::ZERO);
    let id = installment.id;
    installments.push(installment);
    id
}

/// Removes an installment by identity. Returns whether anything was removed.
pub fn remove_installment(installments: &mut Vec<Installment>, id: Uuid) -> bool {
    let before = installments.len();
    installments.retain(|i| i.id != id);
    installments.len() < before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_append_creates_zero_value_installment_due_today() {
        let mut installments = Vec::new();
        let today = date("2026-08-26");

        let id = append_manual_installment(&mut installments, today);

        assert_eq!(installments.len(), 1);
        let appended = &installments[0];
        assert_eq!(appended.id, id);
        assert_eq!(appended.value, Decimal::ZERO);
        assert_eq!(appended.total_value, Decimal::ZERO);
        assert_eq!(appended.due_date, today);
        assert_eq!(appended.title, "Installment 1");
    }

    #[test]
    fn test_append_does_not_retitle_existing_installments() {
        let mut installments = vec![Installment::new(
            1,
            "X-1/1".to_string(),
            date("2026-03-01"),
            Decimal::from_str("100.00").unwrap(),
        )];

        append_manual_installment(&mut installments, date("2026-08-26"));

        // The existing title still claims 1/1 until regeneration is invoked
        assert_eq!(installments[0].title, "X-1/1");
        assert_eq!(installments[1].sequence, 2);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut installments = Vec::new();
        let first = append_manual_installment(&mut installments, date("2026-08-26"));
        let second = append_manual_installment(&mut installments, date("2026-08-26"));

        assert!(remove_installment(&mut installments, first));
        assert_eq!(installments.len(), 1);
        assert_eq!(installments[0].id, second);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut installments = Vec::new();
        append_manual_installment(&mut installments, date("2026-08-26"));

        assert!(!remove_installment(&mut installments, Uuid::new_v4()));
        assert_eq!(installments.len(), 1);
    }
}
