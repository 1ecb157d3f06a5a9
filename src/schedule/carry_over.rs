//! Carry-over of manual fields across list regeneration.
//!
//! Regeneration wholesale replaces the installment list ("regenerate
//! wins"). A caller that wants user-entered payment state to survive the
//! replacement runs this explicit step: it diffs old and new by sequence
//! and copies the payment-related fields onto the fresh list. Values, due
//! dates and adjustments always come from the generator.

use crate::models::Installment;

/// Copies user-entered payment fields from a previous list onto a freshly
/// generated one, matching installments by sequence.
///
/// Carried fields: `status`, `payment_date`, `clearing_date`,
/// `payment_method_ref`, `bank_account_ref`. Generated installments with no
/// sequence match in the previous list are left untouched; previous
/// installments with no match are simply discarded.
pub fn carry_over_payment_fields(
    previous: &[Installment],
    mut generated: Vec<Installment>,
) -> Vec<Installment> {
    for installment in &mut generated {
        if let Some(old) = previous.iter().find(|p| p.sequence == installment.sequence) {
            installment.status = old.status;
            installment.payment_date = old.payment_date;
            installment.clearing_date = old.clearing_date;
            installment.payment_method_ref = old.payment_method_ref.clone();
            installment.bank_account_ref = old.bank_account_ref.clone();
        }
    }
    generated
}
