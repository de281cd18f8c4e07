//! Capture sinks.
//!
//! Two kinds of persistent destination:
//! - **Journals**: append-only markdown files (the ideas file and one file per day)
//! - **Task store**: a relational table of tasks and reminders (`SQLite`)
//!
//! Sinks assume a single writer at a time. Captures arrive at human pace
//! from one process, so neither journals nor the task store take locks.

mod connection;
mod journal;
mod sqlite;
mod traits;

pub use connection::configure_connection;
pub use journal::MarkdownJournal;
pub use sqlite::SqliteTaskStore;
pub use traits::TaskStore;

use std::io;

/// Errors raised while writing to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Filesystem failure (permissions, missing parent that cannot be created, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Task store failure (cannot open, missing table, constraint violation).
    #[error("task store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A due date that has no local-midnight timestamp.
    #[error("invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Result type for sink writes.
pub type SinkResult<T> = std::result::Result<T, SinkError>;
