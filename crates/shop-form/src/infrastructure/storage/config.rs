//! TOML-based configuration for the shop registration form.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\ShopForm\config.toml`
//! - Linux:    `~/.config/shopform/config.toml`
//! - macOS:    `~/Library/Application Support/ShopForm/config.toml`
//!
//! Example:
//!
//! ```toml
//! [form]
//! domain_city_id = "4"
//! min_shop_name_chars = 3
//!
//! [catalog]
//! taken_shop_names = ["tokopedia"]
//!
//! [[catalog.cities]]
//! id = "1"
//! name = "Bekasi"
//!
//! [checker]
//! lookup_delay_ms = 250
//! ```
//!
//! # Serde default values
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields the same configuration as `AppConfig::default()`.  Fields added
//! in later versions therefore never break older config files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shop_core::{default_catalog, City, MIN_SHOP_NAME_CHARS};
use thiserror::Error;

use crate::application::validate_form::{FormSettings, DEFAULT_DOMAIN_CITY_ID};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub checker: CheckerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Form engine tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// City identifier appended to suggested domain names.
    #[serde(default = "default_domain_city_id")]
    pub domain_city_id: String,
    /// Minimum shop-name length in characters.
    #[serde(default = "default_min_shop_name_chars")]
    pub min_shop_name_chars: usize,
}

/// Read-only reference data: selectable cities and names already in use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Cities offered by the city picker.
    #[serde(default = "default_catalog")]
    pub cities: Vec<City>,
    /// Shop names (and domain stems) already registered.
    #[serde(default = "default_taken_shop_names")]
    pub taken_shop_names: Vec<String>,
}

/// Behaviour of the catalog-backed availability lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckerConfig {
    /// Artificial latency added to every lookup, in milliseconds.
    #[serde(default)]
    pub lookup_delay_ms: u64,
}

/// Logging settings for the console driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_domain_city_id() -> String {
    DEFAULT_DOMAIN_CITY_ID.to_string()
}
fn default_min_shop_name_chars() -> usize {
    MIN_SHOP_NAME_CHARS
}
fn default_taken_shop_names() -> Vec<String> {
    ["supergadgettt", "tulusjayashop", "mega-persada", "tokopedia"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            domain_city_id: default_domain_city_id(),
            min_shop_name_chars: default_min_shop_name_chars(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cities: default_catalog(),
            taken_shop_names: default_taken_shop_names(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl FormConfig {
    /// Converts the on-disk section into engine settings.
    pub fn to_settings(&self) -> FormSettings {
        FormSettings {
            domain_city_id: self.domain_city_id.clone(),
            min_shop_name_chars: self.min_shop_name_chars,
        }
    }
}

impl CatalogConfig {
    /// Looks up a city by its catalog identifier.
    pub fn find_city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }
}

impl CheckerConfig {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file, returning
/// `AppConfig::default()` if the file does not yet exist.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// # Errors
///
/// See [`save_config_to`].
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_file_path()?)
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ShopForm"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("shopform"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ShopForm")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
