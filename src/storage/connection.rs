//! Shared connection setup for the `SQLite` task store.

use rusqlite::Connection;

/// Busy timeout applied to every connection, in milliseconds.
pub const BUSY_TIMEOUT_MS: &str = "5000";

/// Configures a freshly opened `SQLite` connection.
///
/// # Configuration Applied
///
/// - **WAL mode**: readers (other tools browsing the task table) do not block inserts
/// - **NORMAL synchronous**: balances durability with performance
/// - **`busy_timeout`**: waits up to 5 seconds on a locked database instead of failing
///
/// Pragma failures are ignored: `journal_mode` returns a row, and an
/// unconfigured connection still accepts inserts.
pub fn configure_connection(conn: &Connection) {
    let _ = conn.pragma_update(None, "journal_mode", "WAL");
    let _ = conn.pragma_update(None, "synchronous", "NORMAL");
    let _ = conn.pragma_update(None, "busy_timeout", BUSY_TIMEOUT_MS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_sets_busy_timeout() {
        let conn = Connection::open_in_memory().unwrap();
        configure_connection(&conn);

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);
    }

    #[test]
    fn test_configure_enables_wal_on_file_db() {
        let dir = tempfile::TempDir::new().unwrap();
        let conn = Connection::open(dir.path().join("tasks.sqlite")).unwrap();
        configure_connection(&conn);

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }
}
