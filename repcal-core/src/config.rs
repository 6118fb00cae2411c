//! User configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RepcalError, RepcalResult};
use crate::repeat::validate_interval;

const ENV_PREFIX: &str = "REPCAL";

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Configuration at ~/.config/repcal/config.toml
///
/// Every key can be overridden with a `REPCAL_`-prefixed environment
/// variable, e.g. `REPCAL_DEFAULT_INTERVAL=2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepcalConfig {
    /// Interval used when none is given on the command line
    pub default_interval: i64,
    pub output: OutputFormat,
    /// tracing filter directive, e.g. "warn" or "repcal_core=debug"
    pub log_level: String,
}

impl Default for RepcalConfig {
    fn default() -> Self {
        RepcalConfig {
            default_interval: 1,
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl RepcalConfig {
    pub fn config_path() -> RepcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RepcalError::Config("Could not determine config directory".into()))?
            .join("repcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file first
    /// if none exists.
    pub fn load() -> RepcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) layered with environment overrides.
    pub fn load_from(path: &Path) -> RepcalResult<Self> {
        debug!(path = %path.display(), "Loading config");

        let config: RepcalConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| RepcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RepcalError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> RepcalResult<()> {
        validate_interval(self.default_interval).map_err(|_| {
            RepcalError::Config(format!(
                "default_interval must be a positive integer, got {}",
                self.default_interval
            ))
        })?;
        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RepcalResult<()> {
        let defaults = RepcalConfig::default();
        let contents = format!(
            "\
# repcal configuration

# Repeat interval used when --interval is not given:
# default_interval = {}

# Output format, \"text\" or \"json\":
# output = \"{}\"

# Log filter (overridden by REPCAL_LOG):
# log_level = \"{}\"
",
            defaults.default_interval, defaults.output, defaults.log_level
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
