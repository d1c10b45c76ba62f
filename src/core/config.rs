//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.minaret/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::timings::CalculationMethod;
use crate::timings::providers::aladhan::DEFAULT_ALADHAN_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MinaretConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub aladhan: AladhanConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_province: Option<String>,
    pub default_city: Option<String>,
    pub method: Option<CalculationMethod>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AladhanConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROVINCE: &str = "Jiangsu (江苏)";
pub const DEFAULT_CITY: &str = "Yangzhou (扬州)";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub province: String,
    pub city: String,
    pub method: CalculationMethod,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.minaret/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".minaret").join("config.toml"))
}

/// Load config from `~/.minaret/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MinaretConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MinaretConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MinaretConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MinaretConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MinaretConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Minaret Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_province = "Jiangsu (江苏)"
# default_city = "Yangzhou (扬州)"
# method = "isna"                    # "jafari", "karachi", "isna", "mwl", "makkah", "egypt"

# [aladhan]
# base_url = "http://api.aladhan.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// CLI-level overrides (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub province: Option<String>,
    pub city: Option<String>,
    pub method: Option<CalculationMethod>,
    pub base_url: Option<String>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MinaretConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Province: CLI → env → config → default
    let province = cli
        .province
        .clone()
        .or_else(|| std::env::var("MINARET_PROVINCE").ok())
        .or_else(|| config.general.default_province.clone())
        .unwrap_or_else(|| DEFAULT_PROVINCE.to_string());

    // City: CLI → env → config → default
    let city = cli
        .city
        .clone()
        .or_else(|| std::env::var("MINARET_CITY").ok())
        .or_else(|| config.general.default_city.clone())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("ALADHAN_BASE_URL").ok())
        .or_else(|| config.aladhan.base_url.clone())
        .unwrap_or_else(|| DEFAULT_ALADHAN_BASE_URL.to_string());

    ResolvedConfig {
        province,
        city,
        method: cli.method.or(config.general.method).unwrap_or_default(),
        base_url,
    }
}
