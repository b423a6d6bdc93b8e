use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::Method;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Catalog asset to load instead of the embedded one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// File that stores the personal recipe notes
    #[serde(default = "default_notes_path")]
    pub notes_path: PathBuf,
    /// Method shown first when a recipe is opened
    #[serde(default)]
    pub default_method: Method,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            notes_path: default_notes_path(),
            default_method: Method::default(),
        }
    }
}

// Default value functions
fn default_notes_path() -> PathBuf {
    PathBuf::from("coffee_prefs.json")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COFFEE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COFFEE__NOTES_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys
        .add_source(
            Environment::with_prefix("COFFEE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
