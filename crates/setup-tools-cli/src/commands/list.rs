//! Commands command
//!
//! Usage: setup-tools commands

use setup_tools_engine::Builtins;
use setup_tools_store::Database;
use std::rc::Rc;

/// Print every built-in command and script path
pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    // Listing never touches the configured database
    let builtins = Builtins::new(Rc::new(Database::open_in_memory()?));

    println!("Commands:");
    for (name, help) in builtins.commands.describe() {
        println!("  {:<18} {}", name, help);
    }

    println!("Functions:");
    for path in builtins.functions.paths() {
        println!("  {}", path);
    }

    Ok(())
}
