//! Tax jurisdiction resolution and document totals aggregation.
//!
//! This module resolves which jurisdiction tax configuration applies to a
//! document (with a deterministic fallback when the destination UF is not
//! configured), aggregates per-line tax results into document totals, and
//! guards against stale responses from the external calculation service
//! with a per-document generation counter.

mod aggregate;
mod resolver;
mod session;

pub use aggregate::{aggregate_totals, local_totals};
pub use resolver::{TaxConfigSource, resolve, select_config};
pub use session::{
    LineTaxCalculator, LineTaxRequest, TaxComputation, TaxRecomputeInput, TaxSession, recompute,
};
