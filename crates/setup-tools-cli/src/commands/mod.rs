//! Subcommand implementations and shared configuration loading

pub mod list;
pub mod plan;
pub mod run;

use clap::Args;
use setup_tools_core::config::ENVIRONMENT_VAR;
use setup_tools_core::SetupConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (default: ./setup-tools.toml if present)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Environment scope; overrides SETUP_TOOLS_ENV and the file
    #[arg(long, short, global = true)]
    pub env: Option<String>,
}

/// Load the configuration and settle the active environment
pub fn load_config(global: &GlobalArgs) -> Result<SetupConfig, Box<dyn std::error::Error>> {
    let config = SetupConfig::load(global.config.as_deref())?
        .with_environment(global.env.clone(), std::env::var(ENVIRONMENT_VAR).ok());

    tracing::debug!(environment = config.environment(), "configuration loaded");
    Ok(config)
}
