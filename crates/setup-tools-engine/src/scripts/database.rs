//! Database reachability probe

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;
use setup_tools_store::errors::from_rusqlite;
use setup_tools_store::Database;

pub fn check_database_connection(
    db: &Database,
    handler: &mut Handler<'_>,
    _args: &[String],
) -> Result<(), ExError> {
    handler.info("Checking database connection...");

    let probe = db.with_conn(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(from_rusqlite)
    });

    match probe {
        Ok(1) => handler.success("Database connection successful (sqlite)"),
        Ok(other) => handler.error(format!(
            "Database connection test failed: unexpected result {}",
            other
        )),
        Err(e) => handler.error(format!("Database connection failed: {}", e.message())),
    }
    Ok(())
}
