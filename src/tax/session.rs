//! Tax recomputation session with stale-response protection.
//!
//! Resolution and aggregation re-run whenever line items, freight,
//! expenses, base flags, the operation nature or the counterparty change.
//! The external fetch/calculate calls are the engine's only suspension
//! points; while one is outstanding the document's totals are marked
//! stale. Each recomputation captures a monotonically incrementing
//! generation at start, and a result is applied only if its generation is
//! still current at arrival — last-write-wins on the triggering input
//! snapshot, so a slow earlier response can never overwrite a newer edit.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{DocumentTaxTotals, LineItem, LineTaxResult, TaxResolutionResult};

use super::aggregate::{aggregate_totals, local_totals};
use super::resolver::{TaxConfigSource, resolve};

/// An external per-line tax calculation service.
///
/// Accepts the jurisdiction pair, the resolved configuration, the line
/// items and the freight/expense amounts, and returns one opaque breakdown
/// per line. The engine performs no retries on failure.
pub trait LineTaxCalculator {
    /// Computes per-line tax breakdowns for a document snapshot.
    fn calculate_lines(
        &self,
        request: &LineTaxRequest,
    ) -> impl Future<Output = EngineResult<Vec<LineTaxResult>>> + Send;
}

/// The payload handed to the external per-line calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTaxRequest {
    /// The document's origin UF.
    pub origin_uf: String,
    /// The document's destination UF.
    pub destination_uf: String,
    /// The resolved jurisdiction configuration, flags included.
    pub config: crate::config::JurisdictionTaxConfig,
    /// The document's line items.
    pub lines: Vec<LineItem>,
    /// Freight amount.
    pub freight: Decimal,
    /// Miscellaneous expenses amount.
    pub expenses: Decimal,
}

/// The inputs that trigger a tax recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRecomputeInput {
    /// The selected operation nature.
    pub operation_nature_id: String,
    /// The document's origin UF.
    pub origin_uf: String,
    /// The destination UF, derived from the counterparty.
    pub destination_uf: String,
    /// The document's line items.
    pub lines: Vec<LineItem>,
    /// Freight amount.
    pub freight: Decimal,
    /// Miscellaneous expenses amount.
    pub expenses: Decimal,
}

/// A completed resolution + aggregation, ready to install.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxComputation {
    /// The resolution outcome, absent when the external calls were
    /// short-circuited by an empty line list.
    pub resolution: Option<TaxResolutionResult>,
    /// The freshly aggregated document totals.
    pub totals: DocumentTaxTotals,
}

/// Per-document tax recomputation state.
///
/// Owns the generation counter, the current totals, the staleness flag and
/// the last resolution outcome. There is exactly one logical writer per
/// document, so no locking is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSession {
    generation: u64,
    totals: DocumentTaxTotals,
    stale: bool,
    resolution: Option<TaxResolutionResult>,
}

impl Default for TaxSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxSession {
    /// Creates a session with zero totals and nothing outstanding.
    pub fn new() -> Self {
        Self {
            generation: 0,
            totals: DocumentTaxTotals::zero(),
            stale: false,
            resolution: None,
        }
    }

    /// The totals currently displayed for the document.
    pub fn totals(&self) -> &DocumentTaxTotals {
        &self.totals
    }

    /// Whether the displayed totals are stale (a recomputation is
    /// outstanding, or the last one failed).
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The last applied resolution outcome, if any.
    pub fn resolution(&self) -> Option<&TaxResolutionResult> {
        self.resolution.as_ref()
    }

    /// Starts a recomputation: bumps the generation, marks the totals
    /// stale, and returns the generation to present at completion.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.stale = true;
        self.generation
    }

    /// Installs a computation if its generation is still current.
    ///
    /// Returns `true` when applied. A response from a superseded
    /// generation is dropped and the session is left untouched, so a newer
    /// edit's totals are never overwritten by a slower earlier call.
    pub fn complete(&mut self, generation: u64, computation: TaxComputation) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping stale tax computation"
            );
            return false;
        }
        self.totals = computation.totals;
        self.resolution = computation.resolution;
        self.stale = false;
        true
    }
}

/// Drives one full recomputation: resolve, calculate, aggregate, install.
///
/// With an empty line list both external calls are skipped and
/// [`local_totals`] is installed. On error (`NoConfigurationFound`, or a
/// calculator failure) the session keeps its prior totals, still flagged
/// stale, and the error is returned for the caller to surface.
///
/// Returns `Ok(true)` when the result was installed, `Ok(false)` when it
/// arrived stale and was dropped.
pub async fn recompute<S, C>(
    session: &mut TaxSession,
    source: &S,
    calculator: &C,
    input: &TaxRecomputeInput,
) -> EngineResult<bool>
where
    S: TaxConfigSource,
    C: LineTaxCalculator,
{
    let generation = session.begin();

    if input.lines.is_empty() {
        let computation = TaxComputation {
            resolution: None,
            totals: local_totals(&input.lines),
        };
        return Ok(session.complete(generation, computation));
    }

    let resolution = resolve(
        source,
        &input.operation_nature_id,
        &input.origin_uf,
        &input.destination_uf,
    )
    .await?;

    let request = LineTaxRequest {
        origin_uf: input.origin_uf.clone(),
        destination_uf: input.destination_uf.clone(),
        config: resolution.active_config.clone(),
        lines: input.lines.clone(),
        freight: input.freight,
        expenses: input.expenses,
    };
    let line_results = calculator.calculate_lines(&request).await?;
    let totals = aggregate_totals(&line_results, input.freight, input.expenses);

    Ok(session.complete(
        generation,
        TaxComputation {
            resolution: Some(resolution),
            totals,
        },
    ))
}
