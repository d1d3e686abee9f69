//! Layered configuration: defaults → TOML file → environment → CLI flags.

use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vincheck.toml";

/// Prefix of environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "VINCHECK_";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Result output format
    pub output: OutputFormat,

    /// Logging configuration
    pub log: LogConfig,
}

/// Result output format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per input
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log filter (e.g., "warn", "debug,vincheck=trace")
    pub level: String,

    /// Log line format
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line output
    #[default]
    Compact,
    /// Human-readable multi-line output
    Pretty,
    /// Structured JSON output
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Builds the provider chain without extracting it.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn figment(path: Option<&Path>) -> anyhow::Result<Figment> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file {} does not exist", path.display());
                }
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(Config::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Loads the configuration from defaults, file and environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)?
            .extract()
            .context("invalid configuration")
    }

    /// Applies command-line flags, which take precedence over every other source.
    #[must_use]
    pub fn with_overrides(mut self, output: Option<OutputFormat>, log_level: Option<String>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(level) = log_level {
            self.log.level = level;
        }
        self
    }
}
