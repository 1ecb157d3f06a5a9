//! Document-level schedule reconciliation.
//!
//! Equal division under rounding may leave the scheduled sum a cent or two
//! away from the document total. The scheduler never corrects this on its
//! own; this check exposes the signed discrepancy so the caller can surface
//! it and the user can fix it through per-installment adjustments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Installment, round_amount};

/// The outcome of comparing a schedule against its document total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReconciliation {
    /// The document total the schedule should reproduce.
    pub expected_total: Decimal,
    /// The rounded sum of installment total values.
    pub scheduled_total: Decimal,
    /// `scheduled_total - expected_total`; negative means a deficit.
    pub difference: Decimal,
}

impl ScheduleReconciliation {
    /// Whether the schedule reproduces the document total exactly.
    pub fn is_balanced(&self) -> bool {
        self.difference.is_zero()
    }
}

/// Compares the installment sum (value + adjustment, each addend already
/// rounded) against the document total.
pub fn reconcile(total: Decimal, installments: &[Installment]) -> ScheduleReconciliation {
    let scheduled_total = round_amount(
        installments
            .iter()
            .map(|i| round_amount(i.total_value))
            .sum(),
    );
    let expected_total = round_amount(total);

    ScheduleReconciliation {
        expected_total,
        scheduled_total,
        difference: scheduled_total - expected_total,
    }
}
