//! Built-in registered commands
//!
//! Each command parses its positional arguments with clap, exactly as if
//! they had been typed after the command name.

pub mod check;
pub mod createsuperuser;
pub mod loaddata;
pub mod migrate;
pub mod showmigrations;

pub use check::Check;
pub use createsuperuser::{CreateSuperuser, EMAIL_VAR, PASSWORD_VAR, USERNAME_VAR};
pub use loaddata::LoadData;
pub use migrate::Migrate;
pub use showmigrations::ShowMigrations;

use clap::Parser;
use setup_tools_core::errors::{ExError, ExErrorKind};
use setup_tools_core::CommandTable;
use setup_tools_store::Database;
use std::rc::Rc;

/// Registry holding every built-in command
pub fn builtin_commands(db: Rc<Database>) -> CommandTable {
    let mut table = CommandTable::new();
    table
        .register(Migrate::new(db.clone()))
        .register(ShowMigrations::new(db.clone()))
        .register(LoadData::new(db.clone()))
        .register(CreateSuperuser::new(db.clone()))
        .register(Check::new(db));
    table
}

/// Parse command arguments, mapping usage errors to `InvalidInput`
pub(crate) fn parse_args<T: Parser>(name: &str, args: &[String]) -> Result<T, ExError> {
    T::try_parse_from(std::iter::once(name).chain(args.iter().map(String::as_str))).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("parse_args")
            .with_target(name)
            .with_message(e.to_string().trim_end().to_string())
    })
}
