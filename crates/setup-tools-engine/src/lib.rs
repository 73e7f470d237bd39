//! setup-tools engine - built-in commands and scripts
//!
//! Provides the units of work a configuration can name out of the box:
//! - registered commands (`migrate`, `showmigrations`, `loaddata`,
//!   `createsuperuser`, `check`)
//! - function references under `setup_tools.scripts.*`
//!
//! Everything shares one [`Database`] for the duration of a run.

pub mod commands;
pub mod password;
pub mod scripts;

use setup_tools_core::{CommandTable, FunctionTable};
use setup_tools_store::Database;
use std::rc::Rc;

/// Command table and function table wired to one database
pub struct Builtins {
    pub commands: CommandTable,
    pub functions: FunctionTable,
}

impl Builtins {
    pub fn new(db: Rc<Database>) -> Self {
        Self {
            commands: commands::builtin_commands(db.clone()),
            functions: scripts::builtin_functions(db),
        }
    }
}
