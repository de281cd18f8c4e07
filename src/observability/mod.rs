//! Observability.
//!
//! Logs go to stderr (or a file) so that stdout stays free for command
//! output.

mod logging;

pub use logging::{LOG_ENV, LogFormat, LoggingConfig};

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static OBSERVABILITY_INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging from config settings with env overrides.
///
/// # Errors
///
/// Returns an error if logging has already been initialized or the log
/// file cannot be opened.
pub fn init_from_settings(settings: &LoggingSettings, verbose: bool) -> Result<()> {
    init(LoggingConfig::from_settings(Some(settings), verbose))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if logging has already been initialized or the log
/// file cannot be opened.
pub fn init(config: LoggingConfig) -> Result<()> {
    if OBSERVABILITY_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "observability already initialized".to_string(),
        });
    }

    // Colors only make sense on a terminal stream.
    let (writer, ansi) = match &config.file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(config.filter)
        .try_init()
        .map_err(|e| Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: e.to_string(),
        })?;

    OBSERVABILITY_INIT
        .set(())
        .map_err(|()| Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "failed to mark observability initialized".to_string(),
        })
}

/// Opens the log file for appending, creating its directory.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
            operation: "create_log_dir".to_string(),
            cause: e.to_string(),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::OperationFailed {
            operation: "open_log_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("natcap.log");

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"line\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("natcap.log");
        std::fs::write(&path, "old\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_open_log_file_in_unwritable_place_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = open_log_file(&blocker.join("natcap.log")).unwrap_err();
        assert!(err.to_string().contains("create_log_dir"));
    }
}
