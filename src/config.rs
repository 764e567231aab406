//! Generator configuration.
//!
//! Handles loading, validating, and merging `config.toml`. User values are
//! sparse overrides on top of the stock defaults: a file needs only the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "en"                      # <html lang> of generated pages
//! credit = "Launched with EZCTO"   # Footer credit line ("" hides it)
//!
//! [selection]
//! jitter = true                    # Random tie-break in [0, 1) per template
//! # seed = 42                      # Fixed seed for reproducible selection
//!
//! [animation]
//! friendly = "0.6s"                # Fade-in duration per vibe
//! edgy = "0.3s"
//! mysterious = "1.2s"
//! energetic = "0.4s"
//!
//! [processing]
//! max_processes = 4                # Batch workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::Vibe;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Footer credit line. Empty hides it.
    pub credit: String,
    /// Template selection settings.
    pub selection: SelectionConfig,
    /// Fade-in animation durations per vibe.
    pub animation: AnimationConfig,
    /// Batch build worker settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            credit: "Launched with EZCTO".to_string(),
            selection: SelectionConfig::default(),
            animation: AnimationConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        for vibe in Vibe::ALL {
            if self.animation.duration(vibe).trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "animation.{vibe} must not be empty"
                )));
            }
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Template selection settings.
///
/// With `jitter` on, every catalog entry gets a random bonus in `[0, 1)` so
/// near-identical projects do not all land on the same layout. `seed` makes
/// that bonus reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub jitter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            jitter: true,
            seed: None,
        }
    }
}

/// Fade-in animation duration per vibe, as CSS time values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub friendly: String,
    pub edgy: String,
    pub mysterious: String,
    pub energetic: String,
}

impl AnimationConfig {
    pub fn duration(&self, vibe: Vibe) -> &str {
        match vibe {
            Vibe::Friendly => &self.friendly,
            Vibe::Edgy => &self.edgy,
            Vibe::Mysterious => &self.mysterious,
            Vibe::Energetic => &self.energetic,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            friendly: "0.6s".to_string(),
            edgy: "0.3s".to_string(),
            mysterious: "1.2s".to_string(),
            energetic: "0.4s".to_string(),
        }
    }
}

/// Parallel processing settings for batch builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    log::debug!("loaded config from {}: {:?}", root.display(), config);
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# EZCTO Site Generator Configuration
# ==================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Language of generated pages (<html lang="...">).
lang = "en"

# Footer credit line. Set to "" to hide it.
credit = "Launched with EZCTO"

# ---------------------------------------------------------------------------
# Template selection
# ---------------------------------------------------------------------------
[selection]
# Add a random bonus in [0, 1) to every template score so similar projects
# get some visual variety. Disable for fully deterministic output.
jitter = true

# Fix the random source so selection is reproducible across runs.
# seed = 42

# ---------------------------------------------------------------------------
# Animation
# ---------------------------------------------------------------------------
[animation]
# Fade-in duration per project vibe (CSS time values).
friendly = "0.6s"
edgy = "0.3s"
mysterious = "1.2s"
energetic = "0.4s"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers for `build`.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
