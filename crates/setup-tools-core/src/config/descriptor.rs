//! Command descriptors
//!
//! A descriptor is written either as a bare identifier (`"migrate"`) or as
//! an array whose head is the identifier and whose tail holds positional
//! arguments (`["loaddata", "users"]`). The identifier is classified once,
//! at parse time: anything containing `.` is a function reference, anything
//! else names a registered command.

use serde::Deserialize;
use std::fmt;

/// Separator that marks an identifier as a dotted function path
pub const PATH_SEPARATOR: char = '.';

/// Which dispatch path a descriptor takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    RegisteredCommand,
    FunctionReference,
}

impl CommandKind {
    /// Classify an identifier by the presence of the path separator
    pub fn classify(identifier: &str) -> Self {
        if identifier.contains(PATH_SEPARATOR) {
            CommandKind::FunctionReference
        } else {
            CommandKind::RegisteredCommand
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::RegisteredCommand => "command",
            CommandKind::FunctionReference => "function",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::RegisteredCommand => write!(f, "management command"),
            CommandKind::FunctionReference => write!(f, "function"),
        }
    }
}

/// A unit of work prior to resolution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub enum CommandDescriptor {
    /// Bare token resolved through the command registry
    RegisteredCommand { name: String, args: Vec<String> },
    /// Dotted path resolved through the function resolver
    FunctionReference { path: String, args: Vec<String> },
}

impl CommandDescriptor {
    /// Build a descriptor from an identifier and its arguments
    pub fn new<I, S>(identifier: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifier = identifier.into();
        let args = args.into_iter().map(Into::into).collect();
        match CommandKind::classify(&identifier) {
            CommandKind::RegisteredCommand => CommandDescriptor::RegisteredCommand {
                name: identifier,
                args,
            },
            CommandKind::FunctionReference => CommandDescriptor::FunctionReference {
                path: identifier,
                args,
            },
        }
    }

    /// Build a descriptor with no arguments
    pub fn bare(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Vec::<String>::new())
    }

    /// The command name or dotted path
    pub fn identifier(&self) -> &str {
        match self {
            CommandDescriptor::RegisteredCommand { name, .. } => name,
            CommandDescriptor::FunctionReference { path, .. } => path,
        }
    }

    pub fn args(&self) -> &[String] {
        match self {
            CommandDescriptor::RegisteredCommand { args, .. }
            | CommandDescriptor::FunctionReference { args, .. } => args,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            CommandDescriptor::RegisteredCommand { .. } => CommandKind::RegisteredCommand,
            CommandDescriptor::FunctionReference { .. } => CommandKind::FunctionReference,
        }
    }
}

impl fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Descriptor as written in the configuration file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDescriptor {
    Name(String),
    Sequence(Vec<String>),
}

impl TryFrom<RawDescriptor> for CommandDescriptor {
    type Error = String;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let (identifier, args) = match raw {
            RawDescriptor::Name(name) => (name, Vec::new()),
            RawDescriptor::Sequence(mut parts) => {
                if parts.is_empty() {
                    return Err("command descriptor array must not be empty".to_string());
                }
                let identifier = parts.remove(0);
                (identifier, parts)
            }
        };

        if identifier.trim().is_empty() {
            return Err("command identifier must not be empty".to_string());
        }

        Ok(CommandDescriptor::new(identifier, args))
    }
}
