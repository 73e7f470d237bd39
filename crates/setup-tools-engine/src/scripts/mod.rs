//! Built-in script functions
//!
//! Registered under `setup_tools.scripts.<name>` so a configuration can list
//! them next to its own function references. Apart from `sync_site_id`,
//! these report problems as error-styled output and return normally.

pub mod cache;
pub mod database;
pub mod environment;
pub mod logs;
pub mod site;
pub mod static_files;

use setup_tools_core::FunctionTable;
use setup_tools_store::Database;
use std::rc::Rc;

/// Module path shared by every built-in script
pub const SCRIPTS_MODULE: &str = "setup_tools.scripts";

/// Full dotted path of a built-in script
pub fn script_path(name: &str) -> String {
    format!("{}.{}", SCRIPTS_MODULE, name)
}

/// Function table holding every built-in script
pub fn builtin_functions(db: Rc<Database>) -> FunctionTable {
    let mut table = FunctionTable::new();

    let site_db = db.clone();
    table.register(script_path("sync_site_id"), move |handler, args| {
        site::sync_site_id(&site_db, handler, args)
    });
    table.register(script_path("check_database_connection"), move |handler, args| {
        database::check_database_connection(&db, handler, args)
    });
    table
        .register(script_path("clear_cache"), cache::clear_cache)
        .register(script_path("check_static_files_config"), static_files::check_static_files_config)
        .register(
            script_path("verify_environment_config"),
            environment::verify_environment_config,
        )
        .register(script_path("setup_log_directories"), logs::setup_log_directories);

    table
}
