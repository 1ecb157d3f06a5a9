//! Error types for the Financial Document Distribution Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine deliberately keeps its error surface small: the scheduler and
//! the tax aggregator degrade to empty/zero results on partial input rather
//! than failing, so the only blocking errors are configuration problems and
//! the total absence of a jurisdiction configuration. Apportionment commit
//! diagnostics live in [`crate::apportionment::CommitError`].

use thiserror::Error;

/// The main error type for the distribution engine.
///
/// # Example
///
/// ```
/// use distribution_engine::error::EngineError;
///
/// let error = EngineError::NoConfigurationFound {
///     operation_nature_id: "sale_interstate".to_string(),
///     destination_uf: "RJ".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No tax configuration found for operation nature 'sale_interstate' (destination RJ)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No jurisdiction tax configuration exists for the operation nature.
    ///
    /// This is a blocking error: aggregation is skipped and prior totals
    /// stay flagged stale until the user configures the jurisdiction.
    #[error(
        "No tax configuration found for operation nature '{operation_nature_id}' (destination {destination_uf})"
    )]
    NoConfigurationFound {
        /// The operation nature whose configuration list was empty.
        operation_nature_id: String,
        /// The destination UF the document was addressed to.
        destination_uf: String,
    },

    /// The external per-line tax calculation service failed.
    ///
    /// The engine performs no retries; retrying is owned by the caller.
    #[error("Tax calculation service error: {message}")]
    TaxService {
        /// A description of the service failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
