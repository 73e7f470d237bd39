use setup_tools_core::errors::ExError;
use setup_tools_core::{
    BufferedOutput, CommandRegistry, FunctionResolver, Handler, ScriptFunction, Settings,
};
use setup_tools_engine::Builtins;
use setup_tools_store::migrations::apply_migrations;
use setup_tools_store::Database;
use std::rc::Rc;

pub fn fresh_db() -> Rc<Database> {
    Rc::new(Database::open_in_memory().unwrap())
}

#[allow(dead_code)]
pub fn migrated_db() -> Rc<Database> {
    let db = fresh_db();
    db.with_conn_mut(|conn| apply_migrations(conn)).unwrap();
    db
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Run a registered command and return its output
#[allow(dead_code)]
pub fn run_command(
    builtins: &Builtins,
    settings: &Settings,
    name: &str,
    values: &[&str],
) -> (Result<(), ExError>, BufferedOutput) {
    let mut out = BufferedOutput::new();
    let result = {
        let mut handler = Handler::new(&mut out, settings);
        builtins
            .commands
            .call_command(name, &args(values), &mut handler)
    };
    (result, out)
}

/// Resolve and call a built-in script and return its output
#[allow(dead_code)]
pub fn run_script(
    builtins: &Builtins,
    settings: &Settings,
    path: &str,
) -> (Result<(), ExError>, BufferedOutput) {
    let mut out = BufferedOutput::new();
    let result = {
        let mut handler = Handler::new(&mut out, settings);
        builtins
            .functions
            .resolve(path)
            .and_then(|function| function.call(&mut handler, &[]))
    };
    (result, out)
}
