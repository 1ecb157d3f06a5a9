//! Jurisdiction tax configuration loading and lookup.
//!
//! This module provides functionality to load jurisdiction tax
//! configurations from YAML files, keyed by operation nature and UF.
//!
//! # Example
//!
//! ```no_run
//! use distribution_engine::config::TaxConfigStore;
//!
//! let store = TaxConfigStore::load("./config/tax").unwrap();
//! for config in store.configs_for("sale_interstate") {
//!     println!("{}: enabled={}", config.uf, config.enabled);
//! }
//! ```

mod loader;
mod types;

pub use loader::TaxConfigStore;
pub use types::{JurisdictionFileEntry, JurisdictionTaxConfig, OperationNatureFile};
