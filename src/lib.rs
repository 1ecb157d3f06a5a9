//! Financial Document Distribution Engine.
//!
//! This crate provides the derived-state logic shared by accounts-payable
//! and sales-quote documents: expanding a monetary total into a schedule of
//! dated installments, apportioning a total across destination buckets with
//! exact-sum reconciliation, and resolving which jurisdiction tax
//! configuration applies to a document before aggregating per-line tax
//! results into document totals.

#![warn(missing_docs)]

pub mod apportionment;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod tax;
