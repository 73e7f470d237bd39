//! Initialization state backed by migration tracking
//!
//! A database counts as initialized once the migration-tracking table
//! exists, whatever migrations it records.

use crate::db::Database;
use crate::migrations::SCHEMA_VERSION_TABLE;
use setup_tools_core::errors::ExError;
use setup_tools_core::InitializationState;
use std::rc::Rc;

/// Answers the orchestrator's "already set up?" question
pub struct MigrationRecorder {
    db: Rc<Database>,
}

impl MigrationRecorder {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl InitializationState for MigrationRecorder {
    fn is_initialized(&self) -> Result<bool, ExError> {
        self.db
            .has_table(SCHEMA_VERSION_TABLE)
            .map_err(|e| e.with_op("has_table"))
    }
}
