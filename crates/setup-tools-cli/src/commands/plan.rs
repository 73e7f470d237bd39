//! Plan command
//!
//! Usage: setup-tools plan [--phase on_initial|always_run]

use crate::commands::{load_config, GlobalArgs};
use clap::Args;
use setup_tools_core::Phase;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Only show this phase
    #[arg(long)]
    pub phase: Option<Phase>,
}

/// Print the resolved commands for each phase
pub fn execute(global: &GlobalArgs, args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;

    let environment = match config.environment() {
        "" => "(default)",
        name => name,
    };
    println!("Environment: {}", environment);

    let phases = match args.phase {
        Some(phase) => vec![phase],
        None => Phase::ALL.to_vec(),
    };

    for phase in phases {
        println!("{}:", phase);
        let commands = config.plan(phase);
        if commands.is_empty() {
            println!("  (none)");
        }
        for command in commands {
            println!("  {} [{}]", command, command.kind().as_str());
        }
    }

    Ok(())
}
