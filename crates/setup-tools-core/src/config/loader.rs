//! Configuration file loading and environment selection

use crate::config::descriptor::CommandDescriptor;
use crate::config::phase::{Configuration, Phase};
use crate::config::settings::Settings;
use crate::errors::{Result, SetupError};
use crate::resolver::resolve;
use serde::Deserialize;
use std::path::Path;

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "setup-tools.toml";

/// Environment variable naming the active environment scope
pub const ENVIRONMENT_VAR: &str = "SETUP_TOOLS_ENV";

/// Everything read from the configuration file
///
/// Loaded once at process start and passed by reference into the
/// orchestrator. Nothing re-reads the file afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Active environment scope; `""` means defaults only
    pub environment: String,
    pub settings: Settings,
    pub commands: Configuration,
}

impl SetupConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SetupError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the configuration for a CLI invocation
    ///
    /// An explicit path must exist. When no path is given the default file is
    /// used if present; otherwise the configuration is empty and the run is a
    /// no-op.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::warn!(
                        path = DEFAULT_CONFIG_FILE,
                        "configuration file not found; using empty configuration"
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Override the file's environment with the flag or the env var
    pub fn with_environment(mut self, flag: Option<String>, env_var: Option<String>) -> Self {
        self.environment = select_environment(flag, env_var, self.environment);
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Ordered commands for a phase under the active environment
    pub fn plan(&self, phase: Phase) -> Vec<CommandDescriptor> {
        resolve(&self.commands, &self.environment, phase)
    }
}

/// Pick the active environment
///
/// Precedence: command-line flag, then the environment variable, then the
/// configuration file. The first value present wins, even when empty.
pub fn select_environment(
    flag: Option<String>,
    env_var: Option<String>,
    from_file: String,
) -> String {
    flag.or(env_var).unwrap_or(from_file)
}
