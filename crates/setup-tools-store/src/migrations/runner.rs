//! Migration runner
//!
//! Applies migrations in order, each in its own transaction, and records
//! them in `schema_version`. Already-applied migrations are skipped after
//! their checksum is verified.

use crate::db::has_table;
use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Table recording applied migrations; its presence marks an initialized database
pub const SCHEMA_VERSION_TABLE: &str = "schema_version";

/// Applied state of one embedded migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub id: &'static str,
    /// Unix timestamp of application; `None` when pending
    pub applied_at: Option<i64>,
}

impl MigrationStatus {
    pub fn is_applied(&self) -> bool {
        self.applied_at.is_some()
    }
}

/// Apply all pending migrations to the database
///
/// Returns the ids of the migrations applied by this call.
pub fn apply_migrations(conn: &mut Connection) -> Result<Vec<&'static str>> {
    create_schema_version_table(conn)?;

    let mut applied = Vec::new();
    for migration in get_migrations() {
        if apply_migration(conn, migration.id, migration.sql)? {
            tracing::debug!(migration = migration.id, "applied migration");
            applied.push(migration.id);
        }
    }

    Ok(applied)
}

/// Applied/pending status of every embedded migration
///
/// A database without `schema_version` reports everything as pending.
pub fn migration_status(conn: &Connection) -> Result<Vec<MigrationStatus>> {
    let tracked = has_table(conn, SCHEMA_VERSION_TABLE)?;

    get_migrations()
        .into_iter()
        .map(|migration| {
            let applied_at = if tracked {
                recorded_migration(conn, migration.id)?.map(|(applied_at, _)| applied_at)
            } else {
                None
            };
            Ok(MigrationStatus {
                id: migration.id,
                applied_at,
            })
        })
        .collect()
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn recorded_migration(
    conn: &Connection,
    migration_id: &str,
) -> Result<Option<(i64, Option<String>)>> {
    conn.query_row(
        "SELECT applied_at, checksum FROM schema_version WHERE migration_id = ?1",
        [migration_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Apply a single migration unless already applied; true when applied now
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<bool> {
    let checksum = compute_checksum(sql);

    if let Some((_, recorded)) = recorded_migration(conn, migration_id)? {
        if let Some(recorded) = recorded {
            if recorded != checksum {
                return Err(checksum_mismatch(migration_id, &recorded, &checksum));
            }
        }
        return Ok(false);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(true)
}
