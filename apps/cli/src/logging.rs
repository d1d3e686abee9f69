//! Logger setup
//!
//! Logs go to stderr so stdout only carries results.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, LogFormat};

/// Parses the filter directive from the configuration.
pub fn filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log filter '{}'", config.level))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns error if:
/// - The filter string cannot be parsed
/// - A global subscriber is already installed
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = filter(config)?;
    let ansi = io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(ansi).with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(ansi).with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    };

    installed.context("failed to install the log subscriber")
}
