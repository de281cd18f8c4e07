//! `SQLite` task store.
//!
//! Inserts go into a `tasks` table shared with other personal tooling, so
//! the store never reads rows back and opens a fresh connection per insert.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tracing::debug;

use super::{SinkResult, TaskStore, configure_connection};
use crate::models::NewTask;
use crate::{Error, Result};

const CREATE_TASKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    category TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    due_date INTEGER,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, category, status, due_date)
     VALUES (?1, ?2, ?3, ?4, ?5)";

/// Task store backed by a `SQLite` file.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    /// Path to the database file.
    db_path: PathBuf,
}

impl SqliteTaskStore {
    /// Creates a store for the database at `db_path`. Nothing is opened yet.
    #[must_use]
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Returns the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates the database file, its parent directory, and the `tasks` table.
    ///
    /// Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the directory, file, or schema
    /// cannot be created.
    pub fn init_schema(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
                operation: "create_task_db_dir".to_string(),
                cause: format!("{}: {e}", parent.display()),
            })?;
        }

        let conn = Connection::open(&self.db_path).map_err(|e| Error::OperationFailed {
            operation: "open_task_db".to_string(),
            cause: format!("{}: {e}", self.db_path.display()),
        })?;
        configure_connection(&conn);

        conn.execute(CREATE_TASKS_TABLE, [])
            .map_err(|e| Error::OperationFailed {
                operation: "create_tasks_table".to_string(),
                cause: e.to_string(),
            })?;

        let _ = conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)",
            [],
        );
        let _ = conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)",
            [],
        );

        debug!(db = %self.db_path.display(), "task schema ready");
        Ok(())
    }

    fn open(&self) -> SinkResult<Connection> {
        // Opening without CREATE keeps an unreachable store from leaving empty files behind.
        let conn = Connection::open_with_flags(
            &self.db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        configure_connection(&conn);
        Ok(conn)
    }
}

impl TaskStore for SqliteTaskStore {
    fn insert_task(&self, task: &NewTask) -> SinkResult<()> {
        let conn = self.open()?;
        conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.category.as_str(),
                task.status.as_str(),
                task.due_date,
            ],
        )?;
        Ok(())
    }

    fn location(&self) -> String {
        self.db_path.display().to_string()
    }
}
