//! Jurisdiction tax configuration store.
//!
//! This module provides the [`TaxConfigStore`] type for loading jurisdiction
//! tax configurations from YAML files and serving lookups by operation
//! nature. It is the default implementation of
//! [`crate::tax::TaxConfigSource`]; production callers may substitute a
//! service-backed source.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::tax::TaxConfigSource;

use super::types::{JurisdictionTaxConfig, OperationNatureFile};

/// Loads and serves jurisdiction tax configurations.
///
/// # Directory Structure
///
/// The configuration directory holds one YAML file per operation nature:
/// ```text
/// config/tax/
/// ├── sale_interstate.yaml
/// ├── sale_intrastate.yaml
/// └── purchase.yaml
/// ```
///
/// Each file declares its operation nature and the per-UF entries:
/// ```yaml
/// operation_nature: sale_interstate
/// configs:
///   - uf: SP
///     enabled: true
///     include_freight_in_base: true
///     rates:
///       icms: "18.0"
/// ```
///
/// # Example
///
/// ```no_run
/// use distribution_engine::config::TaxConfigStore;
///
/// let store = TaxConfigStore::load("./config/tax").unwrap();
/// let configs = store.configs_for("sale_interstate");
/// println!("{} jurisdictions configured", configs.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaxConfigStore {
    configs: HashMap<String, Vec<JurisdictionTaxConfig>>,
}

impl TaxConfigStore {
    /// Loads every YAML file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tax")
    ///
    /// # Returns
    ///
    /// Returns a `TaxConfigStore` on success, or an error if the directory
    /// is missing or any file contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let mut configs: HashMap<String, Vec<JurisdictionTaxConfig>> = HashMap::new();
        for entry in entries {
            let file_path = entry
                .map_err(|e| EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
                .path();

            let is_yaml = file_path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !is_yaml {
                continue;
            }

            let file = Self::load_yaml::<OperationNatureFile>(&file_path)?;
            let nature = file.operation_nature;
            let jurisdiction_configs: Vec<JurisdictionTaxConfig> = file
                .configs
                .into_iter()
                .map(|e| e.into_config(&nature))
                .collect();
            configs.insert(nature, jurisdiction_configs);
        }

        info!(
            operation_natures = configs.len(),
            "loaded jurisdiction tax configuration"
        );

        Ok(Self { configs })
    }

    /// Builds an in-memory store from already-constructed configurations.
    ///
    /// Mostly useful in tests and for callers that fetch configuration from
    /// elsewhere.
    pub fn from_configs(configs: Vec<JurisdictionTaxConfig>) -> Self {
        let mut map: HashMap<String, Vec<JurisdictionTaxConfig>> = HashMap::new();
        for config in configs {
            map.entry(config.operation_nature_id.clone())
                .or_default()
                .push(config);
        }
        Self { configs: map }
    }

    /// Returns the configurations for an operation nature, in file order.
    ///
    /// An unknown operation nature yields an empty slice, which the
    /// resolver reports as `NoConfigurationFound`.
    pub fn configs_for(&self, operation_nature_id: &str) -> &[JurisdictionTaxConfig] {
        self.configs
            .get(operation_nature_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl TaxConfigSource for TaxConfigStore {
    async fn fetch_configs(
        &self,
        operation_nature_id: &str,
    ) -> EngineResult<Vec<JurisdictionTaxConfig>> {
        Ok(self.configs_for(operation_nature_id).to_vec())
    }
}
