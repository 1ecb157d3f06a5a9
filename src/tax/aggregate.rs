//! Document tax totals aggregation.
//!
//! Reduces the external calculator's per-line results into document
//! totals. The reduction is a plain commutative sum over exact decimals,
//! so it is idempotent and independent of line ordering. Whether freight
//! and expenses enter the tax *base* is decided by flags on the resolved
//! configuration and handled by the external calculator; here they always
//! enter the grand total.

use rust_decimal::Decimal;

use crate::models::{DocumentTaxTotals, LineItem, LineTaxResult, round_amount};

/// Aggregates per-line tax results into document totals.
///
/// `grand_total = total_lines - total_discounts + total_taxes +
/// total_freight_and_expenses`. Each component is rounded to two digits at
/// assignment; addends are pre-rounded so the totals match the per-line
/// display values exactly.
pub fn aggregate_totals(
    line_results: &[LineTaxResult],
    freight: Decimal,
    expenses: Decimal,
) -> DocumentTaxTotals {
    let total_lines = round_amount(
        line_results
            .iter()
            .map(|r| round_amount(r.product_total))
            .sum(),
    );
    let total_discounts = round_amount(
        line_results
            .iter()
            .map(|r| round_amount(r.discount))
            .sum(),
    );
    let total_taxes = round_amount(
        line_results
            .iter()
            .map(|r| round_amount(r.tax_total))
            .sum(),
    );
    let total_freight_and_expenses = round_amount(freight + expenses);

    DocumentTaxTotals {
        total_lines,
        total_discounts,
        total_taxes,
        total_freight_and_expenses,
        grand_total: total_lines - total_discounts + total_taxes + total_freight_and_expenses,
    }
}

/// Totals for a document whose per-line tax results are unavailable.
///
/// Used when the line list is empty and the external calculator call is
/// skipped: every component is zero except `total_lines`, which is the
/// simple sum of quantity × unit price with no tax contribution.
pub fn local_totals(lines: &[LineItem]) -> DocumentTaxTotals {
    let total_lines = round_amount(
        lines
            .iter()
            .map(|l| round_amount(l.quantity * l.unit_price))
            .sum(),
    );

    DocumentTaxTotals {
        total_lines,
        ..DocumentTaxTotals::zero()
    }
}
