//! HTTP server configuration parsing from environment variables.

use super::{EnvLookup, parse_or};
use anyhow::{Context, Result};
use std::str::FromStr;

/// How prediction outcomes map to HTTP status codes.
///
/// The JSON body is the same under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCodePolicy {
    /// 400 for invalid input, 500 for inference failures
    #[default]
    Strict,
    /// Always 200; only the `status` field signals failure
    Legacy,
}

impl FromStr for StatusCodePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(StatusCodePolicy::Strict),
            "legacy" => Ok(StatusCodePolicy::Legacy),
            _ => anyhow::bail!(
                "Invalid STATUS_CODE_POLICY: {}. Must be 'strict' or 'legacy'",
                s
            ),
        }
    }
}

/// Server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub json_limit_bytes: usize,
    pub status_code_policy: StatusCodePolicy,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: num_cpus::get(),
            json_limit_bytes: 16 * 1024,
            status_code_policy: StatusCodePolicy::Strict,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Result<Self> {
        let defaults = Self::default();

        let workers = parse_or(lookup, "WORKERS", defaults.workers)?;
        if workers == 0 {
            anyhow::bail!("WORKERS must be at least 1");
        }

        let status_code_policy = match lookup("STATUS_CODE_POLICY") {
            Some(raw) => raw
                .parse::<StatusCodePolicy>()
                .context("Failed to parse STATUS_CODE_POLICY")?,
            None => defaults.status_code_policy,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(lookup, "PORT", defaults.port)?,
            workers,
            json_limit_bytes: parse_or(lookup, "JSON_LIMIT_BYTES", defaults.json_limit_bytes)?,
            status_code_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
