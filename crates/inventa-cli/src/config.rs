//! Configuration loading and types

use std::path::{Path, PathBuf};

use eyre::WrapErr;
use inventa_core::UNSET;
use serde::{Deserialize, Serialize};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "INVENTA_CONFIG";

/// Config file location inside an inventory
pub const INVENTORY_CONFIG: &str = ".inventa/config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub log: LogSettings,
    /// Query defaults
    #[serde(default)]
    pub query: QuerySettings,
    /// File the configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Defaults for `inventa get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Depth used when `--depth` is not given
    #[serde(default)]
    pub depth: i64,
    /// Keys shown when `--keys` is not given; empty means the pseudo-keys
    #[serde(default)]
    pub keys: Vec<String>,
    /// Placeholder printed for missing fields
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            depth: 0,
            keys: Vec::new(),
            sentinel: default_sentinel(),
        }
    }
}

fn default_sentinel() -> String {
    UNSET.to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load from an explicit path, or from default paths, or use defaults
    ///
    /// Lookup order: `explicit`, `$INVENTA_CONFIG`, the inventory's own
    /// `.inventa/config.toml`, then the user config directory.
    ///
    /// # Errors
    /// Returns error if an explicitly named file is missing or any found file
    /// is invalid.
    pub fn load_for(explicit: Option<&Path>, inventory: &Path) -> eyre::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        // Check environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(&PathBuf::from(path));
        }

        let mut paths = vec![inventory.join(INVENTORY_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("inventa/config.toml"));
        }

        for path in paths {
            if path.is_file() {
                return Self::load(&path);
            }
        }

        // Return default config if no file found
        Ok(Config::default())
    }
}
