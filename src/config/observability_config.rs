//! Observability configuration parsing from environment variables.

use super::{EnvLookup, parse_or};
use anyhow::Result;

/// Observability environment configuration
#[derive(Debug, Clone)]
pub struct ObservabilityEnvConfig {
    pub enabled: bool,
    pub log_filter: String,
}

impl Default for ObservabilityEnvConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_filter: "info".to_string(),
        }
    }
}

impl ObservabilityEnvConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            enabled: parse_or(lookup, "OBSERVABILITY_ENABLED", defaults.enabled)?,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}
