//! Installment title generation.
//!
//! Titles carry the document's base identifier plus the installment's
//! position, e.g. `"NF-1042-2/3"`. Regeneration is idempotent and is an
//! explicitly invoked operation: appending or removing installments does
//! not renumber anything until the caller asks for it.

use crate::models::Installment;

/// Builds a display title for one installment.
///
/// With a non-empty base the title is `"{base}-{sequence}/{count}"`;
/// otherwise `"Installment {sequence}"`.
pub fn make_title(title_base: &str, sequence: u32, count: usize) -> String {
    if title_base.is_empty() {
        format!("Installment {}", sequence)
    } else {
        format!("{}-{}/{}", title_base, sequence, count)
    }
}

/// Renumbers sequences by current list order and rewrites every title.
///
/// No other installment field is touched: payment methods, bank accounts,
/// dates and manual adjustments all survive. Running this twice in a row
/// produces the same list as running it once.
///
/// # Example
///
/// ```
/// use distribution_engine::models::Installment;
/// use distribution_engine::schedule::regenerate_titles;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let mut installments = vec![Installment::new(7, "stale".to_string(), due, Decimal::ONE)];
/// regenerate_titles(&mut installments, "NF-1042");
/// assert_eq!(installments[0].sequence, 1);
/// assert_eq!(installments[0].title, "NF-1042-1/1");
/// ```
pub fn regenerate_titles(installments: &mut [Installment], title_base: &str) {
    let count = installments.len();
    for (index, installment) in installments.iter_mut().enumerate() {
        let sequence = (index + 1) as u32;
        installment.sequence = sequence;
        installment.title = make_title(title_base, sequence, count);
    }
}
