//! Configuration module for the price service.
//!
//! Configuration is loaded from environment variables (after `.env`, see
//! `main`), organized by concern: Server, Model, and Observability. Each
//! sub-config reads through an [`EnvLookup`] so it can be exercised without
//! touching the process environment.

mod model_config;
mod observability_config;
mod server_config;

pub use model_config::{DEFAULT_MODEL_FILE, ModelEnvConfig};
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::{ServerEnvConfig, StatusCodePolicy};

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Source of configuration values, keyed by variable name.
pub type EnvLookup = dyn Fn(&str) -> Option<String>;

/// Parses `key` if set, otherwise returns `default`.
pub(crate) fn parse_or<T>(lookup: &EnvLookup, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let base_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::from_lookup(&|key| env::var(key).ok(), &base_dir)
    }

    /// Compose the sub-configs from an arbitrary lookup.
    pub fn from_lookup(lookup: &EnvLookup, base_dir: &Path) -> Result<Self> {
        let server = ServerEnvConfig::from_lookup(lookup).context("Failed to load server config")?;
        let model = ModelEnvConfig::from_lookup(lookup, base_dir);
        let observability = ObservabilityEnvConfig::from_lookup(lookup)
            .context("Failed to load observability config")?;

        Ok(Self {
            server,
            model,
            observability,
        })
    }
}
