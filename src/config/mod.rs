//! Configuration
//!
//! Layered configuration for conversion policy and logging. Precedence, low
//! to high: built-in defaults, the config file (explicit path or the XDG
//! default), then `TREEIFY_*` environment variables.

pub mod facade;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::tree::builder::{
    BuildOptions, DEFAULT_LONG_STRING_THRESHOLD, DEFAULT_MAX_DEPTH, DEFAULT_SCALAR_ROOT_STEM,
};
use serde::{Deserialize, Serialize};

/// Conversion policy knobs, mirrored into [`BuildOptions`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Strings longer than this many characters become `.txt` files.
    #[serde(default = "default_long_string_threshold")]
    pub long_string_threshold: usize,

    /// File stem for a bare scalar root value.
    #[serde(default = "default_scalar_root_stem")]
    pub scalar_root_stem: String,

    /// Recursion guard for pathological nesting.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_long_string_threshold() -> usize {
    DEFAULT_LONG_STRING_THRESHOLD
}

fn default_scalar_root_stem() -> String {
    DEFAULT_SCALAR_ROOT_STEM.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            long_string_threshold: default_long_string_threshold(),
            scalar_root_stem: default_scalar_root_stem(),
            max_depth: default_max_depth(),
        }
    }
}

impl From<&ConversionConfig> for BuildOptions {
    fn from(config: &ConversionConfig) -> Self {
        BuildOptions {
            long_string_threshold: config.long_string_threshold,
            scalar_root_stem: config.scalar_root_stem.clone(),
            max_depth: config.max_depth,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeifyConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_conversion_config_matches_builder_defaults() {
        let config = ConversionConfig::default();
        assert_eq!(config.long_string_threshold, 100);
        assert_eq!(config.scalar_root_stem, "data");
        assert_eq!(config.max_depth, 128);
    }

    #[test]
    fn build_options_mirror_conversion_config() {
        let config = ConversionConfig {
            long_string_threshold: 10,
            scalar_root_stem: "root".to_string(),
            max_depth: 4,
        };
        let options = BuildOptions::from(&config);
        assert_eq!(options.long_string_threshold, 10);
        assert_eq!(options.scalar_root_stem, "root");
        assert_eq!(options.max_depth, 4);
    }

    #[test]
    fn config_deserializes_from_partial_toml() {
        let config: TreeifyConfig =
            toml::from_str("[conversion]\nlong_string_threshold = 32\n").unwrap();
        assert_eq!(config.conversion.long_string_threshold, 32);
        assert_eq!(config.conversion.max_depth, 128);
        assert_eq!(config.logging.level, "info");
    }
}
