//! Model artifact location.

use super::EnvLookup;
use std::path::{Path, PathBuf};

/// Artifact file name expected next to the executable.
pub const DEFAULT_MODEL_FILE: &str = "model_mobil.json";

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
}

impl ModelEnvConfig {
    /// Resolves `MODEL_PATH`; relative paths (and the default) are anchored at
    /// `base_dir`, the directory holding the running executable.
    pub fn from_lookup(lookup: &EnvLookup, base_dir: &Path) -> Self {
        let raw = lookup("MODEL_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FILE));

        let model_path = if raw.is_absolute() {
            raw
        } else {
            base_dir.join(raw)
        };

        Self { model_path }
    }
}
