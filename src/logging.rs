//! Logging setup
//!
//! Structured logging through `tracing`. Log lines always go to stderr so the
//! JSON document is the only thing written to the output file.

use std::str::FromStr;

use clap::ValueEnum;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Error;

/// Environment variable overriding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "TREEJSON_LOG";
/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "TREEJSON_LOG_FORMAT";

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config(format!(
                "invalid log format: {other} (must be 'text' or 'json')"
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, off, or per-module
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Apply `TREEJSON_LOG` and `TREEJSON_LOG_FORMAT` over this config.
    pub fn with_env_overrides(mut self) -> Result<Self, Error> {
        if let Ok(level) = std::env::var(LOG_ENV) {
            if !level.trim().is_empty() {
                self.level = level;
            }
        }
        if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
            self.format = format.parse()?;
        }
        Ok(self)
    }

    pub fn env_filter(&self) -> Result<EnvFilter, Error> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| Error::Config(format!("invalid log level '{}': {}", self.level, e)))
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Error> {
    let filter = config.env_filter()?;
    let base = Registry::default().with(filter);

    let result = match config.format {
        LogFormat::Json => base
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
    Ok(())
}
