//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Settings live in `~/.feedback-flow/config.toml`. The first run writes a
//! template there with every option listed and commented out.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::ratings::{BuildMode, StaticStoreDetector};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub build_mode: Option<BuildMode>,
    pub dry_run: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub installed: Option<bool>,
    pub installed_from_store: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SubmissionConfig {
    pub endpoint: Option<String>,
    pub platform: Option<String>,
    pub app_version: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://feedback.example.com/api/v1/feedback";
pub const DEFAULT_PLATFORM: &str = "cli";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub build_mode: BuildMode,
    pub dry_run: bool,
    pub store: StaticStoreDetector,
    pub endpoint: String,
    pub platform: String,
    pub app_version: String,
}

/// Values supplied on the command line. `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub build_mode: Option<BuildMode>,
    pub dry_run: bool,
}

// ============================================================================
// Error Type
// ============================================================================

/// The settings file exists but could not be used. Both variants name the file.
#[derive(Debug)]
pub enum ConfigError {
    Unreadable { path: PathBuf, source: io::Error },
    Invalid { path: PathBuf, source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            ConfigError::Invalid { path, source } => {
                write!(f, "{} is not a valid settings file: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Unreadable { source, .. } => Some(source),
            ConfigError::Invalid { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

const CONFIG_DIR: &str = ".feedback-flow";
const CONFIG_FILE: &str = "config.toml";

/// Written on first run. Every line is commented out, so it parses to `FlowConfig::default()`.
const CONFIG_TEMPLATE: &str = r#"# feedback-flow settings
# Every key is optional. Unset keys take their built-in value.
# Precedence, lowest first: built-in, this file, FEEDBACK_* env vars, CLI flags.

# [general]
# build_mode = "debug"               # "debug" or "release"; defaults to how the binary was built
# dry_run = false                    # log submissions instead of sending them

# [store]
# installed = false                  # is the app store present on this device
# installed_from_store = false       # was the app installed through the store

# [submission]
# endpoint = "https://feedback.example.com/api/v1/feedback"   # Or set FEEDBACK_ENDPOINT
# platform = "cli"
# app_version = "0.1.0"
"#;

/// `$HOME/.feedback-flow/config.toml`, or `None` without a home directory.
pub fn config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(CONFIG_DIR);
    path.push(CONFIG_FILE);
    Some(path)
}

pub fn load_config() -> Result<FlowConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("No home directory; running with built-in settings");
        return Ok(FlowConfig::default());
    };
    load_config_from(&path)
}

/// Reads the settings at `path`. A missing file is seeded with the template
/// and counts as empty.
pub fn load_config_from(path: &Path) -> Result<FlowConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            match write_template(path) {
                Ok(()) => info!("Wrote a settings template to {}", path.display()),
                Err(e) => warn!("Could not write a settings template to {}: {e}", path.display()),
            }
            return Ok(FlowConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: FlowConfig = toml::from_str(&text).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Using settings from {}", path.display());
    debug!("{config:?}");
    Ok(config)
}

fn write_template(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, CONFIG_TEMPLATE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlowConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Build mode: CLI → env → config → compiled-in
    let build_mode = cli
        .build_mode
        .or_else(env_build_mode)
        .or(config.general.build_mode)
        .unwrap_or_else(BuildMode::current);

    // Dry run: any layer switching it on wins
    let dry_run = cli.dry_run
        || env_flag("FEEDBACK_DRY_RUN")
        || config.general.dry_run.unwrap_or(false);

    // Endpoint: env → config → default
    let endpoint = std::env::var("FEEDBACK_ENDPOINT")
        .ok()
        .or_else(|| config.submission.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    ResolvedConfig {
        build_mode,
        dry_run,
        store: StaticStoreDetector {
            installed: config.store.installed.unwrap_or(false),
            installed_from_store: config.store.installed_from_store.unwrap_or(false),
        },
        endpoint,
        platform: config
            .submission
            .platform
            .clone()
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
        app_version: config
            .submission
            .app_version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn env_build_mode() -> Option<BuildMode> {
    let raw = std::env::var("FEEDBACK_BUILD_MODE").ok()?;
    match raw.to_ascii_lowercase().as_str() {
        "debug" => Some(BuildMode::Debug),
        "release" => Some(BuildMode::Release),
        other => {
            warn!("Ignoring unknown FEEDBACK_BUILD_MODE value: {}", other);
            None
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
