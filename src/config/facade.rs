//! ConfigLoader facade: defaults, optional file, TREEIFY_* env overlay.

use super::TreeifyConfig;
use crate::error::ApiError;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// XDG config file path (~/.config/treeify/config.toml), when resolvable.
    pub fn xdg_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "treeify", "treeify")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default sources.
    /// Precedence: defaults (lowest) -> XDG config file -> environment (highest).
    pub fn load() -> Result<TreeifyConfig, ApiError> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&TreeifyConfig::default())
                .map_err(|e| ApiError::ConfigError(e.to_string()))?,
        );
        if let Some(path) = Self::xdg_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        let config = builder
            .add_source(
                Environment::with_prefix("TREEIFY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TreeifyConfig, ApiError> {
        let config = Config::builder()
            .add_source(
                Config::try_from(&TreeifyConfig::default())
                    .map_err(|e| ApiError::ConfigError(e.to_string()))?,
            )
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("TREEIFY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }
}
