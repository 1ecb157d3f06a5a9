//! Jurisdiction tax configuration resolution.
//!
//! A document is taxed under the configuration for its destination UF when
//! one is configured and enabled. When it is not, the engine falls back —
//! first to the origin UF, then to the first configured jurisdiction — and
//! flags the fallback so the caller can show a non-blocking warning. Only
//! a completely empty configuration list is a blocking error.

use tracing::warn;

use crate::config::JurisdictionTaxConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::TaxResolutionResult;

/// An external source of jurisdiction tax configurations.
///
/// The default implementation is [`crate::config::TaxConfigStore`];
/// production callers may substitute a service-backed lookup. Fetching is
/// the engine's only suspension point besides the per-line calculator.
pub trait TaxConfigSource {
    /// Fetches the configurations for an operation nature, in the source's
    /// preference order.
    fn fetch_configs(
        &self,
        operation_nature_id: &str,
    ) -> impl Future<Output = EngineResult<Vec<JurisdictionTaxConfig>>> + Send;
}

/// Selects which configuration applies to a jurisdiction pair.
///
/// Selection order:
/// 1. the config for `destination_uf`, if present **and** enabled;
/// 2. the config for `origin_uf`;
/// 3. the first config in the list;
/// 4. otherwise resolution fails with
///    [`EngineError::NoConfigurationFound`].
///
/// Whenever step 1 does not apply but a fallback succeeds, the result has
/// `used_fallback == true` and `fallback_reason` names the UF actually
/// used.
pub fn select_config(
    configs: &[JurisdictionTaxConfig],
    operation_nature_id: &str,
    origin_uf: &str,
    destination_uf: &str,
) -> EngineResult<TaxResolutionResult> {
    let destination = configs.iter().find(|c| c.uf == destination_uf);

    if let Some(config) = destination.filter(|c| c.enabled) {
        return Ok(TaxResolutionResult {
            active_config: config.clone(),
            used_fallback: false,
            fallback_reason: None,
        });
    }

    let destination_state = if destination.is_some() {
        "disabled"
    } else {
        "not configured"
    };

    let fallback = configs
        .iter()
        .find(|c| c.uf == origin_uf)
        .or_else(|| configs.first());

    match fallback {
        Some(config) => {
            let reason = format!(
                "Destination UF {} is {}; using configuration for UF {}",
                destination_uf, destination_state, config.uf
            );
            warn!(
                operation_nature_id,
                destination_uf,
                fallback_uf = %config.uf,
                "tax jurisdiction fallback"
            );
            Ok(TaxResolutionResult {
                active_config: config.clone(),
                used_fallback: true,
                fallback_reason: Some(reason),
            })
        }
        None => Err(EngineError::NoConfigurationFound {
            operation_nature_id: operation_nature_id.to_string(),
            destination_uf: destination_uf.to_string(),
        }),
    }
}

/// Fetches the configuration list for an operation nature and selects the
/// applicable entry for the jurisdiction pair.
pub async fn resolve<S: TaxConfigSource>(
    source: &S,
    operation_nature_id: &str,
    origin_uf: &str,
    destination_uf: &str,
) -> EngineResult<TaxResolutionResult> {
    let configs = source.fetch_configs(operation_nature_id).await?;
    select_config(&configs, operation_nature_id, origin_uf, destination_uf)
}
