//! Tax resolution and aggregation models.
//!
//! These types carry the inputs and outputs of the tax jurisdiction
//! resolver and the document-totals aggregator. The per-line tax breakdown
//! is produced by an external calculation service; the engine treats it as
//! opaque beyond the summed fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::JurisdictionTaxConfig;

/// A document line item as the engine sees it.
///
/// Loosely-typed product records are mapped to this closed shape at the
/// boundary; the engine only reads what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identity of the line within the document.
    pub id: String,
    /// Quantity ordered.
    pub quantity: Decimal,
    /// Unit price of the product.
    pub unit_price: Decimal,
    /// Per-line discount amount.
    #[serde(default)]
    pub discount: Decimal,
}

/// One tax type's base/rate/value triple within a line's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDetail {
    /// The tax type this detail belongs to (e.g. "icms", "ipi").
    pub tax_type: String,
    /// The calculation base used by the external service.
    pub base: Decimal,
    /// The rate applied, in percent.
    pub rate: Decimal,
    /// The resulting tax value.
    pub value: Decimal,
}

/// The external calculator's result for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTaxResult {
    /// The line this result belongs to.
    pub line_id: String,
    /// The line's product total (quantity × unit price).
    pub product_total: Decimal,
    /// The line's discount amount.
    pub discount: Decimal,
    /// The sum of all tax values for the line.
    pub tax_total: Decimal,
    /// Per-tax-type breakdown, opaque to the aggregator.
    #[serde(default)]
    pub taxes: Vec<TaxDetail>,
}

/// The outcome of resolving which jurisdiction configuration applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResolutionResult {
    /// The configuration the document will be taxed under.
    pub active_config: JurisdictionTaxConfig,
    /// Whether a non-destination configuration had to be used.
    pub used_fallback: bool,
    /// Names the UF actually used when a fallback applied.
    ///
    /// Surfaced to the user as a non-blocking warning, not an error.
    pub fallback_reason: Option<String>,
}

/// Document-level tax totals, recomputed atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTaxTotals {
    /// Sum of per-line product totals.
    pub total_lines: Decimal,
    /// Sum of per-line discounts.
    pub total_discounts: Decimal,
    /// Sum of per-line tax values.
    pub total_taxes: Decimal,
    /// Freight plus miscellaneous expenses.
    pub total_freight_and_expenses: Decimal,
    /// `total_lines - total_discounts + total_taxes + total_freight_and_expenses`.
    pub grand_total: Decimal,
}

impl DocumentTaxTotals {
    /// All-zero totals, the state of a document with nothing computed yet.
    pub fn zero() -> Self {
        Self {
            total_lines: Decimal::ZERO,
            total_discounts: Decimal::ZERO,
            total_taxes: Decimal::ZERO,
            total_freight_and_expenses: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}
