//! Input file loading.
//!
//! Profiles and snapshots are JSON when the file ends in `.json` and YAML
//! otherwise. The configuration file is always YAML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use spacereg_engine::RequirementAssessment;
use spacereg_frameworks::EngineConfig;

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.json`
    Json,
    /// Anything else.
    Yaml,
}

impl Format {
    /// Format for `path`.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and deserialize a JSON or YAML document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = match Format::of(path) {
        Format::Json => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?,
        Format::Yaml => serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))?,
    };
    tracing::debug!(path = %path.display(), "loaded input document");
    Ok(value)
}

/// Read a profile as an untyped JSON value.
pub fn read_profile(path: &Path) -> Result<serde_json::Value> {
    read_document(path)
}

/// Read a status snapshot. No file means an empty snapshot.
pub fn read_snapshot(path: Option<&Path>) -> Result<Vec<RequirementAssessment>> {
    match path {
        Some(path) => read_document(path),
        None => Ok(Vec::new()),
    }
}

/// Load the engine configuration. No file means the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = EngineConfig::from_yaml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded engine configuration");
    Ok(config)
}
