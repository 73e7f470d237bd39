//! setup-tools CLI
//!
//! Runs the configured deploy-time setup commands

use clap::{Parser, Subcommand};
use setup_tools_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "setup-tools")]
#[command(about = "setup-tools - Run one-time and every-deploy setup commands", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    /// Log profile: dev, prod (JSON) or test
    #[arg(long, global = true, default_value = "dev")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run on_initial (first deploy only) then always_run
    Run,
    /// Print the resolved commands without running them
    Plan(commands::plan::PlanArgs),
    /// List built-in commands and script functions
    Commands,
}

fn main() {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Run => commands::run::execute(&cli.global),
        Commands::Plan(args) => commands::plan::execute(&cli.global, args),
        Commands::Commands => commands::list::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut cause = e.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {}", err);
            cause = err.source();
        }
        std::process::exit(1);
    }
}
