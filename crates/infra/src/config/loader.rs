//! Configuration loader
//!
//! Builds the runtime configuration in three layers: compiled-in
//! defaults, an optional config file, then environment variables on top.
//!
//! ## Environment Variables
//! - `AWSOMESHOP_API_BASE_URL`: REST backend base URL
//! - `AWSOMESHOP_API_TIMEOUT_MS`: request timeout in milliseconds
//! - `AWSOMESHOP_SESSION_PATH`: session document path
//! - `AWSOMESHOP_IPGEO_API_KEY`: IP-geolocation API key
//! - `AWSOMESHOP_IPGEO_BASE_URL`: IP-geolocation base URL
//! - `AWSOMESHOP_DEFAULT_LANGUAGE`: fallback UI language
//!
//! ## File Locations
//! The loader probes, in order: `./config.toml`, `./config.json`,
//! `./awsomeshop.toml`, `./awsomeshop.json`, then the same names next to
//! the executable. TOML and JSON are both accepted, detected by
//! extension.

use std::path::{Path, PathBuf};

use awsomeshop_domain::{Config, Result, ShopError};

/// Load configuration with the full default/file/env layering.
///
/// A `.env` file in the working directory is loaded first, so its
/// variables take part in the env overlay.
///
/// # Errors
/// Returns `ShopError::Config` if a config file is present but invalid,
/// or an environment variable holds an unparseable value.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, starting from defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Missing sections
/// fall back to their defaults.
///
/// # Errors
/// Returns `ShopError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Overlay environment variables onto an existing configuration.
///
/// # Errors
/// Returns `ShopError::Config` when a variable is set but unparseable.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(base_url) = std::env::var("AWSOMESHOP_API_BASE_URL") {
        config.api.base_url = base_url;
    }
    if let Ok(timeout) = std::env::var("AWSOMESHOP_API_TIMEOUT_MS") {
        config.api.timeout_ms = timeout
            .parse::<u64>()
            .map_err(|e| ShopError::Config(format!("Invalid timeout: {e}")))?;
    }
    if let Ok(path) = std::env::var("AWSOMESHOP_SESSION_PATH") {
        config.session.path = PathBuf::from(path);
    }
    if let Ok(key) = std::env::var("AWSOMESHOP_IPGEO_API_KEY") {
        config.locale.geo_api_key = Some(key);
    }
    if let Ok(base_url) = std::env::var("AWSOMESHOP_IPGEO_BASE_URL") {
        config.locale.geo_base_url = Some(base_url);
    }
    if let Ok(language) = std::env::var("AWSOMESHOP_DEFAULT_LANGUAGE") {
        config.locale.default_language = language;
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShopError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file.
fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.toml"),
            cwd.join("config.json"),
            cwd.join("awsomeshop.toml"),
            cwd.join("awsomeshop.json"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.toml"),
                exe_dir.join("config.json"),
                exe_dir.join("awsomeshop.toml"),
                exe_dir.join("awsomeshop.json"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}
