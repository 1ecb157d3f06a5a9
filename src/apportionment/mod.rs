//! Apportionment balancing for the Financial Document Distribution Engine.
//!
//! Splits a document's total across multiple destination buckets with
//! exact-sum reconciliation. Freely editable while open; blocking checks
//! apply only at commit time.

mod balancer;
mod commit;

pub use balancer::Apportionment;
pub use commit::{BucketAssignment, CommitError};
