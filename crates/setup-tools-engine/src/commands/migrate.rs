//! `migrate`: apply pending embedded migrations

use crate::commands::parse_args;
use clap::Parser;
use setup_tools_core::errors::ExError;
use setup_tools_core::{Handler, ManagementCommand};
use setup_tools_store::migrations::apply_migrations;
use setup_tools_store::Database;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "migrate")]
struct MigrateArgs {
    /// Accepted for compatibility; migrate never prompts
    #[arg(long = "no-input", alias = "noinput")]
    _no_input: bool,
}

pub struct Migrate {
    db: Rc<Database>,
}

impl Migrate {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl ManagementCommand for Migrate {
    fn name(&self) -> &str {
        "migrate"
    }

    fn help(&self) -> &str {
        "Apply pending database migrations"
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> Result<(), ExError> {
        parse_args::<MigrateArgs>(self.name(), args)?;

        handler.heading("Operations to perform:");
        handler.plain("  Apply all migrations");
        handler.heading("Running migrations:");

        let applied = self.db.with_conn_mut(|conn| apply_migrations(conn))?;
        if applied.is_empty() {
            handler.plain("  No migrations to apply.");
        }
        for id in &applied {
            handler.success(format!("  Applying {}... OK", id));
        }

        tracing::info!(applied = applied.len(), "migrations applied");
        Ok(())
    }
}
