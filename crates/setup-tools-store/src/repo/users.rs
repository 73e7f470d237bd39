//! User accounts

use crate::errors::{from_rusqlite, user_exists, Result};
use rusqlite::{Connection, OptionalExtension};

/// Account to be created; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub is_staff: bool,
}

pub struct UserRepo;

impl UserRepo {
    /// Insert a user; an existing username is an `AlreadyExists` error
    ///
    /// Superusers are always staff.
    pub fn create(conn: &Connection, user: &NewUser) -> Result<i64> {
        if Self::exists(conn, &user.username)? {
            return Err(user_exists(&user.username));
        }

        conn.execute(
            "INSERT INTO users (username, email, password_hash, is_superuser, is_staff, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                user.username,
                user.email,
                user.password_hash,
                user.is_superuser,
                user.is_superuser,
                chrono::Utc::now().timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    pub fn exists(conn: &Connection, username: &str) -> Result<bool> {
        Ok(Self::get(conn, username)?.is_some())
    }

    pub fn get(conn: &Connection, username: &str) -> Result<Option<User>> {
        conn.query_row(
            "SELECT id, username, email, password_hash, is_superuser, is_staff
             FROM users WHERE username = ?1",
            [username],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: row.get(3)?,
                    is_superuser: row.get(4)?,
                    is_staff: row.get(5)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn count_superusers(conn: &Connection) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM users WHERE is_superuser = 1",
            [],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}
