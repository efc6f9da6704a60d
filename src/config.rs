//! Configuration file support for rigcheck.
//!
//! Provides YAML-based configuration through `rigcheck.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::dto::{OutputFormat, ProfileDraft};
use crate::application::session::SessionSettings;
use crate::catalog::domain::{Platform, SortKey};
use crate::shared::security::validate_config_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "rigcheck.config.yml";

/// Upper bound for any configured delay
const MAX_DELAY_MS: u64 = 60_000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    /// Defaults for `analyze` when a flag is not given
    pub profile: Option<ProfileDraft>,
    pub platforms: Option<Vec<Platform>>,
    pub sort: Option<SortKey>,
    pub seed: Option<u64>,
    pub search_debounce_ms: Option<u64>,
    pub range_debounce_ms: Option<u64>,
    pub latency_ms: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Session settings with configured values layered over the defaults
    pub fn session_settings(&self) -> SessionSettings {
        let defaults = SessionSettings::default();
        SessionSettings {
            platforms: self
                .platforms
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(Platform::distinct)
                .unwrap_or(defaults.platforms),
            search_debounce: self
                .search_debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            range_debounce: self
                .range_debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.range_debounce),
            latency: self
                .latency_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.latency),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        validate_config_file(path)?;
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax and known values \
             (format: text|json|markdown, sort: none|price-low|price-high|discount).",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let delays = [
        ("search_debounce_ms", config.search_debounce_ms),
        ("range_debounce_ms", config.range_debounce_ms),
        ("latency_ms", config.latency_ms),
    ];
    for (name, value) in delays {
        if let Some(ms) = value {
            if ms > MAX_DELAY_MS {
                bail!(
                    "Invalid config: {} must be at most {} (got {}).\n\n\
                     💡 Hint: Delays are given in milliseconds.",
                    name,
                    MAX_DELAY_MS,
                    ms
                );
            }
        }
    }

    if let Some(ram) = config.profile.and_then(|p| p.ram) {
        if ram == 0 {
            bail!(
                "Invalid config: profile.ram must be greater than 0.\n\n\
                 💡 Hint: Give the installed memory in GB, e.g. `ram: 16`."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
