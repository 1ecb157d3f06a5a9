//! Apportionment commit checks and the document bucket assignment.
//!
//! An apportionment is freely editable while open; it only blocks at
//! commit time. Commit failures are reported distinctly so the caller can
//! render a specific diagnostic — which condition failed and, for an
//! unbalanced list, the signed deficit/excess amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::balancer::Apportionment;

/// Why an apportionment cannot be committed.
///
/// Conditions are checked in declaration order, so structural problems
/// (empty list, missing buckets, non-positive values) surface before the
/// arithmetic balance check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The entry list is empty.
    #[error("Apportionment has no entries")]
    Empty,

    /// One or more entries have no destination bucket selected.
    #[error("{count} apportionment entries are missing a bucket selection")]
    MissingBucket {
        /// How many entries lack a bucket.
        count: usize,
    },

    /// One or more entries have a zero or negative value.
    #[error("{count} apportionment entries have a non-positive value")]
    NonPositiveValue {
        /// How many entries are non-positive.
        count: usize,
    },

    /// The entry values do not reproduce the target exactly.
    #[error("Apportionment sum differs from the target by {difference}")]
    Unbalanced {
        /// `current_sum - target`; negative means a deficit.
        difference: Decimal,
    },
}

/// The document's bucket assignment, replaced by a successful commit.
///
/// While `Single`, the document's bucket field is directly editable. After
/// a commit it becomes a `Distributed` marker and the single-bucket field
/// turns read-only, re-editable only by clearing the apportionment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BucketAssignment {
    /// The whole total goes to one bucket (possibly not yet chosen).
    Single {
        /// The single destination bucket, if selected.
        bucket_ref: Option<String>,
    },
    /// The total is distributed across several buckets.
    Distributed {
        /// How many buckets the total was distributed across.
        bucket_count: usize,
    },
}

impl BucketAssignment {
    /// Whether the single-bucket field is still directly editable.
    pub fn is_single_editable(&self) -> bool {
        matches!(self, BucketAssignment::Single { .. })
    }
}

impl Apportionment {
    /// Checks every commit condition without committing.
    ///
    /// Returns the first failing condition: empty list, missing bucket
    /// selection(s), non-positive value(s), then unbalanced total.
    pub fn check_commit(&self) -> Result<(), CommitError> {
        if self.is_empty() {
            return Err(CommitError::Empty);
        }

        let missing = self
            .entries()
            .iter()
            .filter(|e| e.bucket_ref.as_deref().is_none_or(str::is_empty))
            .count();
        if missing > 0 {
            return Err(CommitError::MissingBucket { count: missing });
        }

        let non_positive = self
            .entries()
            .iter()
            .filter(|e| e.value <= Decimal::ZERO)
            .count();
        if non_positive > 0 {
            return Err(CommitError::NonPositiveValue {
                count: non_positive,
            });
        }

        if !self.is_balanced() {
            return Err(CommitError::Unbalanced {
                difference: self.difference(),
            });
        }

        Ok(())
    }

    /// Commits the distribution, replacing the document's prior
    /// single-bucket assignment with a `Distributed` marker.
    pub fn commit(&self, assignment: &mut BucketAssignment) -> Result<(), CommitError> {
        self.check_commit()?;
        *assignment = BucketAssignment::Distributed {
            bucket_count: self.entries().len(),
        };
        Ok(())
    }

    /// Clears the apportionment and restores single-bucket editability.
    pub fn clear_distribution(&mut self, assignment: &mut BucketAssignment) {
        self.clear();
        *assignment = BucketAssignment::Single { bucket_ref: None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn balanced_two_entry() -> (Apportionment, Uuid, Uuid) {
        let mut apportionment = Apportionment::new(dec("1000.00"));
        let first = apportionment.add_entry();
        let second = apportionment.add_entry();
        apportionment.set_bucket(first, "acct_4001", "Office supplies");
        apportionment.set_bucket(second, "acct_4002", "Freight");
        apportionment.set_value(first, dec("600.00"));
        apportionment.set_value(second, dec("400.00"));
        (apportionment, first, second)
    }

    #[test]
    fn test_empty_list_cannot_commit() {
        let apportionment = Apportionment::new(dec("1000.00"));
        assert_eq!(apportionment.check_commit(), Err(CommitError::Empty));
    }

    #[test]
    fn test_missing_bucket_reported_with_count() {
        let mut apportionment = Apportionment::new(dec("1000.00"));
        let first = apportionment.add_entry();
        apportionment.add_entry();
        apportionment.set_bucket(first, "acct_4001", "Office supplies");
        apportionment.set_value(first, dec("1000.00"));

        assert_eq!(
            apportionment.check_commit(),
            Err(CommitError::MissingBucket { count: 1 })
        );
    }

    #[test]
    fn test_non_positive_value_reported_with_count() {
        let (mut apportionment, _, second) = balanced_two_entry();
        apportionment.set_value(second, Decimal::ZERO);
        // restore balance so only the non-positive check can fail
        let third = apportionment.add_entry();
        apportionment.set_bucket(third, "acct_4003", "Misc");
        apportionment.set_value(third, dec("400.00"));

        assert_eq!(
            apportionment.check_commit(),
            Err(CommitError::NonPositiveValue { count: 1 })
        );
    }

    /// AP-004: deficit is reported with its signed amount
    #[test]
    fn test_unbalanced_reports_signed_difference() {
        let (mut apportionment, _, second) = balanced_two_entry();
        apportionment.set_value(second, dec("399.99"));

        assert_eq!(
            apportionment.check_commit(),
            Err(CommitError::Unbalanced {
                difference: dec("-0.01")
            })
        );
    }

    #[test]
    fn test_excess_is_positive_difference() {
        let (mut apportionment, _, second) = balanced_two_entry();
        apportionment.set_value(second, dec("400.02"));

        assert_eq!(
            apportionment.check_commit(),
            Err(CommitError::Unbalanced {
                difference: dec("0.02")
            })
        );
    }

    #[test]
    fn test_commit_replaces_single_assignment() {
        let (apportionment, _, _) = balanced_two_entry();
        let mut assignment = BucketAssignment::Single {
            bucket_ref: Some("acct_4000".to_string()),
        };

        apportionment.commit(&mut assignment).unwrap();

        assert_eq!(
            assignment,
            BucketAssignment::Distributed { bucket_count: 2 }
        );
        assert!(!assignment.is_single_editable());
    }

    #[test]
    fn test_failed_commit_leaves_assignment_untouched() {
        let apportionment = Apportionment::new(dec("1000.00"));
        let mut assignment = BucketAssignment::Single {
            bucket_ref: Some("acct_4000".to_string()),
        };

        assert!(apportionment.commit(&mut assignment).is_err());
        assert_eq!(
            assignment,
            BucketAssignment::Single {
                bucket_ref: Some("acct_4000".to_string())
            }
        );
    }

    #[test]
    fn test_clear_distribution_restores_editability() {
        let (mut apportionment, _, _) = balanced_two_entry();
        let mut assignment = BucketAssignment::Single { bucket_ref: None };
        apportionment.commit(&mut assignment).unwrap();

        apportionment.clear_distribution(&mut assignment);

        assert!(apportionment.is_empty());
        assert_eq!(assignment, BucketAssignment::Single { bucket_ref: None });
        assert!(assignment.is_single_editable());
    }

    #[test]
    fn test_commit_error_messages() {
        assert_eq!(CommitError::Empty.to_string(), "Apportionment has no entries");
        assert_eq!(
            CommitError::MissingBucket { count: 2 }.to_string(),
            "2 apportionment entries are missing a bucket selection"
        );
        assert_eq!(
            CommitError::Unbalanced {
                difference: dec("-0.01")
            }
            .to_string(),
            "Apportionment sum differs from the target by -0.01"
        );
    }
}
