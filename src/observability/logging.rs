//! Structured logging configuration.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable holding the natcap log filter.
pub const LOG_ENV: &str = "NATCAP_LOG";

/// Level used when nothing else is configured.
const DEFAULT_LEVEL: &str = "warn";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Append to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging config from settings.
    ///
    /// The filter comes from `NATCAP_LOG`, then `RUST_LOG`, then `debug`
    /// when `verbose` is set, then the configured level, then `warn`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_directive = [LOG_ENV, "RUST_LOG"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()));
        let configured = settings.and_then(|s| s.level.clone());

        let directive = env_directive
            .or_else(|| verbose.then(|| "debug".to_string()))
            .or(configured)
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        Self {
            filter: build_filter(&directive),
            format: settings
                .and_then(|s| s.format.as_deref())
                .map(LogFormat::parse)
                .unwrap_or_default(),
            file: settings.and_then(|s| s.file.clone()),
        }
    }
}

/// Parses a filter directive, falling back to the default level when invalid.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
