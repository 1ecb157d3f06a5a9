//! Core data models for the Financial Document Distribution Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod apportionment;
mod installment;
mod money;
mod tax;

pub use apportionment::ApportionmentEntry;
pub use installment::{DocumentStatus, Installment, InstallmentStatus};
pub use money::{AMOUNT_SCALE, percent_of, percent_share, round_amount};
pub use tax::{DocumentTaxTotals, LineItem, LineTaxResult, TaxDetail, TaxResolutionResult};
