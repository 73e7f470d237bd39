//! Database connection management
//!
//! Provides utilities for opening SQLite connections and the single shared
//! connection used by every built-in command during one run.

use crate::errors::{from_rusqlite, io_error, Result};
use setup_tools_core::errors::{ExError, ExErrorKind};
use rusqlite::{Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    Ok(())
}

/// True if a table with this name exists
pub fn has_table(conn: &Connection, table: &str) -> Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |_| Ok(true),
    )
    .optional()
    .map(|found| found.unwrap_or(false))
    .map_err(from_rusqlite)
}

/// A single connection shared by the built-in commands and scripts
///
/// Access is scoped to a closure; nested access from inside a closure fails
/// with an `Internal` error instead of panicking.
///
/// Opening never reads the file. Pragmas are applied on first access, so an
/// unreadable file surfaces as an error from that access.
pub struct Database {
    conn: RefCell<Connection>,
    path: Option<PathBuf>,
    configured: Cell<bool>,
}

impl Database {
    /// Open (creating if needed) the database file and its parent directory
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
        }
        let conn = open(path)?;
        tracing::debug!(path = %path.display(), "opened database");

        Ok(Self {
            conn: RefCell::new(conn),
            path: Some(path.to_path_buf()),
            configured: Cell::new(false),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = open_in_memory()?;
        Ok(Self {
            conn: RefCell::new(conn),
            path: None,
            configured: Cell::new(false),
        })
    }

    /// File backing this database; `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` with shared access to the connection
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn.try_borrow().map_err(|_| busy())?;
        self.ensure_configured(&conn)?;
        f(&conn)
    }

    /// Run `f` with exclusive access to the connection (transactions)
    pub fn with_conn_mut<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.conn.try_borrow_mut().map_err(|_| busy())?;
        self.ensure_configured(&conn)?;
        f(&mut conn)
    }

    pub fn has_table(&self, table: &str) -> Result<bool> {
        self.with_conn(|conn| has_table(conn, table))
    }

    fn ensure_configured(&self, conn: &Connection) -> Result<()> {
        if self.configured.get() {
            return Ok(());
        }
        configure(conn)?;
        if self.path.is_some() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")
                .map_err(from_rusqlite)?;
        }
        self.configured.set(true);
        Ok(())
    }
}

fn busy() -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("database_access")
        .with_message("Database connection is already in use")
}
