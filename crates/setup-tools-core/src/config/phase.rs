//! Execution phases and the environment-scoped command configuration

use crate::config::descriptor::CommandDescriptor;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Scope key that is always consulted, regardless of environment
pub const DEFAULT_SCOPE: &str = "";

/// The two fixed execution stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Runs only when no persistent initialization state exists
    OnInitial,
    /// Runs on every invocation
    AlwaysRun,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::OnInitial, Phase::AlwaysRun];

    /// The configuration key for this phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::OnInitial => "on_initial",
            Phase::AlwaysRun => "always_run",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_initial" => Ok(Phase::OnInitial),
            "always_run" => Ok(Phase::AlwaysRun),
            other => Err(format!(
                "unknown phase '{}': expected 'on_initial' or 'always_run'",
                other
            )),
        }
    }
}

/// Commands declared for one scope, per phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseCommands {
    pub on_initial: Vec<CommandDescriptor>,
    pub always_run: Vec<CommandDescriptor>,
}

impl PhaseCommands {
    pub fn commands(&self, phase: Phase) -> &[CommandDescriptor] {
        match phase {
            Phase::OnInitial => &self.on_initial,
            Phase::AlwaysRun => &self.always_run,
        }
    }

    pub fn commands_mut(&mut self, phase: Phase) -> &mut Vec<CommandDescriptor> {
        match phase {
            Phase::OnInitial => &mut self.on_initial,
            Phase::AlwaysRun => &mut self.always_run,
        }
    }
}

/// Environment name → phase commands
///
/// The `""` scope holds the defaults; every other key names an environment
/// whose commands are appended after the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, PhaseCommands>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for a scope, if the scope is declared at all
    pub fn scope(&self, environment: &str) -> Option<&PhaseCommands> {
        self.0.get(environment)
    }

    /// Mutable access to a scope, creating it when missing
    pub fn scope_mut(&mut self, environment: impl Into<String>) -> &mut PhaseCommands {
        self.0.entry(environment.into()).or_default()
    }

    /// Append a descriptor to a scope's phase
    pub fn push(
        &mut self,
        environment: impl Into<String>,
        phase: Phase,
        descriptor: CommandDescriptor,
    ) -> &mut Self {
        self.scope_mut(environment)
            .commands_mut(phase)
            .push(descriptor);
        self
    }

    /// True when no scope is declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
