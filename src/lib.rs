//! # natcap
//!
//! Natural capture: file free-form text without thinking about where it goes.
//!
//! A message such as `idea: build a habit tracker` or
//! `remind me to call John tomorrow` is classified into a capture type by an
//! ordered cascade of regex rules, then routed to exactly one sink:
//!
//! - an ideas journal (ideas, bookmarks, quotes)
//! - a per-day journal (notes, brain dumps)
//! - a `SQLite` task table (todos, tasks, reminders)
//!
//! ## Example
//!
//! ```rust,ignore
//! use natcap::{CaptureService, NatcapConfig};
//!
//! let config = NatcapConfig::load_default();
//! let service = CaptureService::from_config(&config);
//! let outcome = service.capture("todo: buy milk", "cli")?;
//! println!("{}", outcome.response());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::NatcapConfig;
pub use models::{Capture, CaptureType, RouteResult};
pub use services::{CaptureOutcome, CaptureParser, CaptureRouter, CaptureService, parse_capture};
pub use storage::{SqliteTaskStore, TaskStore};

/// Error type for natcap operations.
///
/// Routing failures are not errors: they are reported through
/// [`RouteResult`].
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty capture text |
/// | `OperationFailed` | Config file unreadable, schema init fails, logging init fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for natcap operations.
pub type Result<T> = std::result::Result<T, Error>;
