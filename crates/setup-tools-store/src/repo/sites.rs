//! Site records

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: i64,
    pub domain: String,
    pub name: String,
}

pub struct SiteRepo;

impl SiteRepo {
    /// Insert or update the site with `site.id`; true when it was created
    pub fn upsert(conn: &Connection, site: &Site) -> Result<bool> {
        let created = Self::get(conn, site.id)?.is_none();
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "INSERT INTO sites (id, domain, name, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                domain = excluded.domain,
                name = excluded.name,
                updated_at = excluded.updated_at",
            rusqlite::params![site.id, site.domain, site.name, now],
        )
        .map_err(from_rusqlite)?;

        Ok(created)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Site>> {
        conn.query_row(
            "SELECT id, domain, name FROM sites WHERE id = ?1",
            [id],
            |row| {
                Ok(Site {
                    id: row.get(0)?,
                    domain: row.get(1)?,
                    name: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }
}
