//! Migration framework
//!
//! Provides:
//! - Migration runner with checksum verification
//! - Idempotent application
//! - Embedded SQL migrations
//! - Applied/pending status for `showmigrations`

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migrations, migration_status, MigrationStatus, SCHEMA_VERSION_TABLE};
