//! Records loaded from fixtures

use crate::errors::{from_rusqlite, from_serde_json, Result};
use crate::fixtures::FixtureRecord;
use rusqlite::{Connection, OptionalExtension};

pub struct FixtureRepo;

impl FixtureRepo {
    /// Upsert every record in one transaction; returns the number written
    ///
    /// Records are keyed by (model, pk); loading the same fixture twice
    /// leaves one row per key holding the latest fields.
    pub fn upsert_all(
        conn: &mut Connection,
        records: &[FixtureRecord],
        source: Option<&str>,
    ) -> Result<usize> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let now = chrono::Utc::now().timestamp();

        for record in records {
            let fields = serde_json::to_string(&record.fields).map_err(from_serde_json)?;
            tx.execute(
                "INSERT INTO fixture_records (model, pk, fields, source, loaded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(model, pk) DO UPDATE SET
                    fields = excluded.fields,
                    source = excluded.source,
                    loaded_at = excluded.loaded_at",
                rusqlite::params![record.model, record.pk.to_string(), fields, source, now],
            )
            .map_err(from_rusqlite)?;
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(records.len())
    }

    /// Stored fields for one record
    pub fn get(conn: &Connection, model: &str, pk: &str) -> Result<Option<serde_json::Value>> {
        let fields: Option<String> = conn
            .query_row(
                "SELECT fields FROM fixture_records WHERE model = ?1 AND pk = ?2",
                [model, pk],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        fields
            .map(|f| serde_json::from_str(&f).map_err(from_serde_json))
            .transpose()
    }

    pub fn count(conn: &Connection, model: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM fixture_records WHERE model = ?1",
            [model],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}
