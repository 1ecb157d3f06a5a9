//! Installment scheduling for the Financial Document Distribution Engine.
//!
//! This module expands a document total into a schedule of dated
//! installments according to a payment-term policy, regenerates display
//! titles, derives the aggregate document status, carries user-entered
//! payment fields across list regeneration, supports manual list edits,
//! and reconciles the scheduled sum against the document total.

mod carry_over;
mod generate;
mod manual;
mod policy;
mod reconcile;
mod status;
mod titles;

pub use carry_over::carry_over_payment_fields;
pub use generate::generate_installments;
pub use manual::{append_manual_installment, remove_installment};
pub use policy::{CustomEntry, PaymentTermPolicy};
pub use reconcile::{ScheduleReconciliation, reconcile};
pub use status::compute_status;
pub use titles::{make_title, regenerate_titles};
