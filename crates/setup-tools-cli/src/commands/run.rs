//! Run command
//!
//! Usage: setup-tools run [--config PATH] [--env ENV]

use crate::commands::{load_config, GlobalArgs};
use setup_tools_core::{ConsoleOutput, Orchestrator, OutputSink, Style};
use setup_tools_engine::Builtins;
use setup_tools_store::{Database, MigrationRecorder};
use std::rc::Rc;

/// Execute both phases against the configured database
pub fn execute(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;

    // Nothing to run: keep the working directory untouched
    let db = if config.commands.is_empty() {
        Database::open_in_memory()?
    } else {
        Database::open(&config.settings.database)?
    };
    let db = Rc::new(db);
    let builtins = Builtins::new(db.clone());
    let recorder = MigrationRecorder::new(db);

    let orchestrator = Orchestrator::new(
        &config,
        &recorder,
        &builtins.functions,
        &builtins.commands,
    );

    let mut out = ConsoleOutput::stdout();
    let report = orchestrator.run(&mut out)?;

    out.write(
        Style::Success,
        &format!("✓ Setup complete ({} command(s) run)", report.dispatched.len()),
    );
    Ok(())
}
