//! Derived document status.

use crate::models::{DocumentStatus, Installment, InstallmentStatus};

/// Derives the aggregate document status from its installments.
///
/// Empty list or no paid installment → `Pending`; all paid → `Paid`;
/// otherwise `Partial`. Recomputed after every installment list mutation.
/// This function never yields `Cancelled` — that state is set only by
/// explicit user action.
pub fn compute_status(installments: &[Installment]) -> DocumentStatus {
    let paid = installments
        .iter()
        .filter(|i| i.status == InstallmentStatus::Paid)
        .count();

    if paid == 0 {
        DocumentStatus::Pending
    } else if paid == installments.len() {
        DocumentStatus::Paid
    } else {
        DocumentStatus::Partial
    }
}
