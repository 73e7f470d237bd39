//! `showmigrations`: list embedded migrations and whether they are applied

use crate::commands::parse_args;
use clap::Parser;
use setup_tools_core::errors::ExError;
use setup_tools_core::{Handler, ManagementCommand};
use setup_tools_store::migrations::migration_status;
use setup_tools_store::Database;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "showmigrations")]
struct ShowMigrationsArgs {}

pub struct ShowMigrations {
    db: Rc<Database>,
}

impl ShowMigrations {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl ManagementCommand for ShowMigrations {
    fn name(&self) -> &str {
        "showmigrations"
    }

    fn help(&self) -> &str {
        "List migrations and their applied state"
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> Result<(), ExError> {
        parse_args::<ShowMigrationsArgs>(self.name(), args)?;

        let status = self.db.with_conn(migration_status)?;
        for migration in status {
            let marker = if migration.is_applied() { "X" } else { " " };
            handler.plain(format!(" [{}] {}", marker, migration.id));
        }
        Ok(())
    }
}
