//! Configuration loading and cache directory resolution
//!
//! Cache directory priority order:
//! 1. Command-line argument (highest priority)
//! 2. `MAGAZINE_CACHE_DIR` environment variable
//! 3. `cache_dir` key of the TOML config file
//! 4. Compiled default `./cache`
//!
//! A missing or malformed config file never stops startup: the binary logs a
//! warning and resolves from the remaining sources.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::{Error, Result};

pub const CACHE_DIR_ENV: &str = "MAGAZINE_CACHE_DIR";
pub const CONFIG_DIR_NAME: &str = "magpho";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration from TOML; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Socket address for the tool server, e.g. "127.0.0.1:5790"
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Log level directive (trace, debug, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Values used when no other source provides one
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefaults {
    pub cache_dir: PathBuf,
    pub bind_address: String,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./cache"),
            bind_address: "127.0.0.1:5790".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Where the resolved cache directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirSource {
    CommandLine,
    Environment,
    ConfigFile,
    CompiledDefault,
}

impl fmt::Display for CacheDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CacheDirSource::CommandLine => "command line",
            CacheDirSource::Environment => CACHE_DIR_ENV,
            CacheDirSource::ConfigFile => "config file",
            CacheDirSource::CompiledDefault => "compiled default",
        };
        f.write_str(label)
    }
}

/// Platform config file location, if one exists
///
/// Checks the user config directory (`~/.config/magpho/config.toml` on
/// Linux) first, then `/etc/magpho/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    if let Some(path) = user_config {
        if path.is_file() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        if system_config.is_file() {
            return Some(system_config);
        }
    }

    None
}

/// Resolves the catalog cache directory
#[derive(Debug, Clone)]
pub struct CacheDirResolver {
    cli_arg: Option<PathBuf>,
    toml: TomlConfig,
    defaults: CompiledDefaults,
}

impl CacheDirResolver {
    /// Resolver over an already loaded TOML config
    pub fn with_toml(cli_arg: Option<PathBuf>, toml: TomlConfig) -> Self {
        Self {
            cli_arg,
            toml,
            defaults: CompiledDefaults::default(),
        }
    }

    /// Resolved directory and the source that supplied it
    ///
    /// An empty environment variable counts as unset.
    pub fn resolve_with_source(&self) -> (PathBuf, CacheDirSource) {
        if let Some(path) = &self.cli_arg {
            return (path.clone(), CacheDirSource::CommandLine);
        }

        if let Ok(path) = std::env::var(CACHE_DIR_ENV) {
            if !path.is_empty() {
                return (PathBuf::from(path), CacheDirSource::Environment);
            }
        }

        if let Some(path) = &self.toml.cache_dir {
            return (path.clone(), CacheDirSource::ConfigFile);
        }

        (self.defaults.cache_dir.clone(), CacheDirSource::CompiledDefault)
    }

    pub fn resolve(&self) -> PathBuf {
        let (path, source) = self.resolve_with_source();
        info!("Cache directory: {} (from {})", path.display(), source);
        path
    }

    /// Bind address: explicit override, then TOML, then compiled default
    pub fn bind_address(&self, cli_arg: Option<&str>) -> String {
        cli_arg
            .map(str::to_string)
            .or_else(|| self.toml.bind_address.clone())
            .unwrap_or_else(|| self.defaults.bind_address.clone())
    }
}
