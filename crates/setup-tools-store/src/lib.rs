//! setup-tools store - SQLite persistence for the built-in commands
//!
//! Provides:
//! - Connection helpers and a shared single-connection `Database`
//! - Embedded migrations with checksums, plus the runner behind `migrate`
//! - `MigrationRecorder`, the initialization-state collaborator
//! - YAML fixture format and parser for `loaddata`
//! - Repositories for sites, users and fixture records

pub mod db;
pub mod errors;
pub mod fixtures;
pub mod migrations;
pub mod recorder;
pub mod repo;

// Re-export key types
pub use db::Database;
pub use errors::Result;
pub use recorder::MigrationRecorder;
