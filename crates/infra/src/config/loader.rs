//! Configuration loader
//!
//! Loads the transport configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from a config file: the path in `EDGESHIELD_CONFIG` if set,
//!    otherwise the first file found by [`probe_config_paths`], otherwise the
//!    built-in defaults
//! 2. Apply environment overrides on top
//! 3. Validate the result
//!
//! ## Environment Variables
//! - `EDGESHIELD_API_URL`: Base URL of the control-plane API
//! - `EDGESHIELD_CONFIG`: Explicit config file path
//!
//! ## File Format
//! JSON or TOML, detected by extension. Every key is optional:
//!
//! ```toml
//! base_url = "https://shield.example.com/api"
//! timeout_ms = 10000
//!
//! [headers]
//! X-Client = "ops-console"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use edgeshield_domain::constants::{ENV_API_URL, ENV_CONFIG_PATH};
use edgeshield_domain::{Result, ShieldError, TransportConfig};
use serde::Deserialize;
use url::Url;

const CONFIG_FILE_NAMES: [&str; 2] = ["edgeshield.toml", "edgeshield.json"];

/// On-disk shape of the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
    #[serde(default)]
    headers: BTreeMap<String, String>,
}

impl FileConfig {
    fn into_transport_config(self) -> TransportConfig {
        let mut config = TransportConfig::default();
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(timeout_ms));
        }
        self.headers
            .into_iter()
            .fold(config, |config, (name, value)| config.with_header(name, value))
    }
}

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ShieldError::Config` if:
/// - `EDGESHIELD_CONFIG` names a file that does not exist
/// - File format is invalid
/// - The resulting configuration fails [`validate`]
pub fn load() -> Result<TransportConfig> {
    let base = match env_var(ENV_CONFIG_PATH) {
        Some(path) => read_file(&PathBuf::from(path))?,
        None => match probe_config_paths() {
            Some(path) => read_file(&path)?,
            None => {
                tracing::debug!("No config file found, using built-in defaults");
                TransportConfig::default()
            }
        },
    };

    let config = apply_env_overrides(base);
    validate(&config)?;
    tracing::info!(
        base_url = config.base_url(),
        timeout_ms = u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from environment variables only
///
/// Anything the environment does not set keeps its built-in default.
///
/// # Errors
/// Returns `ShieldError::Config` if the resulting configuration fails
/// [`validate`].
pub fn load_from_env() -> Result<TransportConfig> {
    let config = apply_env_overrides(TransportConfig::default());
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for a config file.
/// Environment variables are not consulted.
///
/// # Errors
/// Returns `ShieldError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails [`validate`]
pub fn load_from_file(path: Option<PathBuf>) -> Result<TransportConfig> {
    let config_path = match path {
        Some(p) => p,
        None => probe_config_paths().ok_or_else(|| {
            ShieldError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    let config = read_file(&config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Check that a configuration can actually be used
///
/// # Errors
/// Returns `ShieldError::Config` if the base URL is not an absolute
/// `http`/`https` URL or the timeout is zero.
pub fn validate(config: &TransportConfig) -> Result<()> {
    let url = Url::parse(config.base_url()).map_err(|e| {
        ShieldError::Config(format!("Invalid base URL '{}': {}", config.base_url(), e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ShieldError::Config(format!(
            "Unsupported base URL scheme '{}': expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ShieldError::Config(format!("Base URL has no host: {}", config.base_url())));
    }
    if config.timeout().is_zero() {
        return Err(ShieldError::Config("Timeout must be greater than zero".to_string()));
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<TransportConfig> {
    if !path.exists() {
        return Err(ShieldError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ShieldError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ShieldError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<TransportConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let file: FileConfig = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShieldError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShieldError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(ShieldError::Config(format!("Unsupported config format: {}", extension)))
        }
    };

    Ok(file.into_transport_config())
}

fn apply_env_overrides(config: TransportConfig) -> TransportConfig {
    match env_var(ENV_API_URL) {
        Some(base_url) => {
            tracing::debug!(base_url = %base_url, "Base URL taken from environment");
            config.with_base_url(base_url)
        }
        None => config,
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for `edgeshield.toml` / `edgeshield.json` in the following
/// locations (in order):
/// 1. Current working directory
/// 2. Parent directories (up to 2 levels)
/// 3. Executable directory
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable value
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
