//! Jurisdiction tax configuration types.
//!
//! This module contains the strongly-typed configuration structures keyed
//! by (operation nature, UF). Configurations are read-only inputs to the
//! engine: they are fetched, matched against a document's jurisdiction
//! pair, and handed to the external per-line calculator untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tax configuration for one (operation nature, UF) pair.
///
/// The per-tax-type rate map is opaque to the engine; it is forwarded to
/// the external per-line calculator. Only the `enabled` flag and the two
/// base-adjustment flags participate in engine decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionTaxConfig {
    /// The operation nature this configuration belongs to.
    pub operation_nature_id: String,
    /// The state (UF) this configuration applies to.
    pub uf: String,
    /// Whether this configuration may be selected as a destination match.
    pub enabled: bool,
    /// Whether freight is included in the tax base.
    pub include_freight_in_base: bool,
    /// Whether miscellaneous expenses are included in the tax base.
    pub include_expenses_in_base: bool,
    /// Per-tax-type rates, in percent (e.g. `icms: 18.0`).
    pub rates: HashMap<String, Decimal>,
}

/// One jurisdiction entry as it appears in a configuration file.
///
/// The operation nature is stamped onto each entry by the loader from the
/// file header, so entries themselves only carry per-UF data.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionFileEntry {
    /// The state (UF) this entry applies to.
    pub uf: String,
    /// Whether the entry is selectable as a destination match.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether freight is included in the tax base.
    #[serde(default)]
    pub include_freight_in_base: bool,
    /// Whether miscellaneous expenses are included in the tax base.
    #[serde(default)]
    pub include_expenses_in_base: bool,
    /// Per-tax-type rates, in percent.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

fn default_enabled() -> bool {
    true
}

/// Configuration file structure for one operation nature.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationNatureFile {
    /// The operation nature id this file configures.
    pub operation_nature: String,
    /// The per-UF jurisdiction entries, in file order.
    pub configs: Vec<JurisdictionFileEntry>,
}

impl JurisdictionFileEntry {
    /// Converts a file entry into a full configuration record.
    pub fn into_config(self, operation_nature_id: &str) -> JurisdictionTaxConfig {
        JurisdictionTaxConfig {
            operation_nature_id: operation_nature_id.to_string(),
            uf: self.uf,
            enabled: self.enabled,
            include_freight_in_base: self.include_freight_in_base,
            include_expenses_in_base: self.include_expenses_in_base,
            rates: self.rates,
        }
    }
}
