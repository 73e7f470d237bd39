//! Command dispatch
//!
//! A descriptor takes one of two paths:
//! - **Function reference**: the dotted path is resolved through a
//!   [`FunctionResolver`] and the resolved function is called with the
//!   [`Handler`] followed by the declared arguments.
//! - **Registered command**: the name and arguments are handed to a
//!   [`CommandRegistry`].
//!
//! Every failure is translated into a single [`SetupError`] and the first
//! failure stops the sequence.

use crate::config::{CommandDescriptor, CommandKind, Settings};
use crate::errors::{ExError, ExErrorKind, Result, SetupError};
use crate::output::{OutputSink, Style};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeMap;
use std::time::Instant;

/// Invoking context handed to every dispatched unit
///
/// Exposes styled output and the host settings.
pub struct Handler<'a> {
    out: &'a mut dyn OutputSink,
    settings: &'a Settings,
}

impl<'a> Handler<'a> {
    pub fn new(out: &'a mut dyn OutputSink, settings: &'a Settings) -> Self {
        Self { out, settings }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn write(&mut self, style: Style, message: impl AsRef<str>) {
        self.out.write(style, message.as_ref());
    }

    pub fn plain(&mut self, message: impl AsRef<str>) {
        self.write(Style::Plain, message);
    }

    pub fn notice(&mut self, message: impl AsRef<str>) {
        self.write(Style::Notice, message);
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.write(Style::HttpInfo, message);
    }

    pub fn heading(&mut self, message: impl AsRef<str>) {
        self.write(Style::MigrateHeading, message);
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.write(Style::Success, message);
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.write(Style::Warning, message);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.write(Style::Error, message);
    }
}

/// A callable addressed by dotted path
pub trait ScriptFunction {
    fn call(&self, handler: &mut Handler<'_>, args: &[String]) -> std::result::Result<(), ExError>;
}

impl<F> ScriptFunction for F
where
    F: Fn(&mut Handler<'_>, &[String]) -> std::result::Result<(), ExError>,
{
    fn call(&self, handler: &mut Handler<'_>, args: &[String]) -> std::result::Result<(), ExError> {
        self(handler, args)
    }
}

/// Resolves dotted paths to callables
pub trait FunctionResolver {
    fn resolve(&self, path: &str) -> std::result::Result<&dyn ScriptFunction, ExError>;
}

/// Invokes commands registered by name
pub trait CommandRegistry {
    fn call_command(
        &self,
        name: &str,
        args: &[String],
        handler: &mut Handler<'_>,
    ) -> std::result::Result<(), ExError>;
}

/// A named command that can be registered in a [`CommandTable`]
pub trait ManagementCommand {
    fn name(&self) -> &str;

    /// One-line description shown by `setup-tools commands`
    fn help(&self) -> &str {
        ""
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> std::result::Result<(), ExError>;
}

/// In-memory function table keyed by dotted path
#[derive(Default)]
pub struct FunctionTable {
    functions: BTreeMap<String, Box<dyn ScriptFunction>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under a dotted path, replacing any previous entry
    pub fn register<F>(&mut self, path: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(&mut Handler<'_>, &[String]) -> std::result::Result<(), ExError> + 'static,
    {
        self.functions.insert(path.into(), Box::new(function));
        self
    }

    /// Registered paths, sorted
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl FunctionResolver for FunctionTable {
    fn resolve(&self, path: &str) -> std::result::Result<&dyn ScriptFunction, ExError> {
        self.functions
            .get(path)
            .map(|f| &**f)
            .ok_or_else(|| {
                ExError::new(ExErrorKind::NotFound)
                    .with_op("resolve_function")
                    .with_target(path)
                    .with_message(format!("No function registered at '{}'", path))
            })
    }
}

/// In-memory command registry keyed by name
#[derive(Default)]
pub struct CommandTable {
    commands: BTreeMap<String, Box<dyn ManagementCommand>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name, replacing any previous entry
    pub fn register(&mut self, command: impl ManagementCommand + 'static) -> &mut Self {
        self.commands
            .insert(command.name().to_string(), Box::new(command));
        self
    }

    /// (name, help) pairs, sorted by name
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|(name, command)| (name.as_str(), command.help()))
            .collect()
    }
}

impl CommandRegistry for CommandTable {
    fn call_command(
        &self,
        name: &str,
        args: &[String],
        handler: &mut Handler<'_>,
    ) -> std::result::Result<(), ExError> {
        let command = self.commands.get(name).ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("call_command")
                .with_target(name)
                .with_message(format!("Unknown command: {}", name))
        })?;
        command.handle(handler, args)
    }
}

/// Normalizes descriptors and routes them to the right collaborator
pub struct Dispatcher<'a> {
    resolver: &'a dyn FunctionResolver,
    registry: &'a dyn CommandRegistry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(resolver: &'a dyn FunctionResolver, registry: &'a dyn CommandRegistry) -> Self {
        Self { resolver, registry }
    }

    /// Dispatch a single descriptor
    pub fn dispatch_one(
        &self,
        descriptor: &CommandDescriptor,
        handler: &mut Handler<'_>,
    ) -> Result<()> {
        let started = Instant::now();
        let kind = descriptor.kind();
        log_op_start!(
            "dispatch",
            command = descriptor.identifier(),
            kind = kind.as_str()
        );

        let result = match descriptor {
            CommandDescriptor::FunctionReference { path, args } => {
                self.call_function(path, args, handler)
            }
            CommandDescriptor::RegisteredCommand { name, args } => self
                .registry
                .call_command(name, args, handler)
                .map_err(|source| SetupError::Execution {
                    name: name.clone(),
                    kind,
                    source,
                }),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!(
                    "dispatch",
                    duration_ms = duration_ms,
                    command = descriptor.identifier()
                );
            }
            Err(err) => {
                log_op_error!(
                    "dispatch",
                    err.clone(),
                    duration_ms = duration_ms,
                    command = descriptor.identifier()
                );
            }
        }

        result
    }

    /// Dispatch descriptors in order, stopping at the first failure
    pub fn dispatch_all(
        &self,
        descriptors: &[CommandDescriptor],
        handler: &mut Handler<'_>,
    ) -> Result<()> {
        for descriptor in descriptors {
            self.dispatch_one(descriptor, handler)?;
        }
        Ok(())
    }

    fn call_function(&self, path: &str, args: &[String], handler: &mut Handler<'_>) -> Result<()> {
        let function = self
            .resolver
            .resolve(path)
            .map_err(|source| SetupError::Resolution {
                path: path.to_string(),
                source,
            })?;

        function
            .call(handler, args)
            .map_err(|source| SetupError::Execution {
                name: path.to_string(),
                kind: CommandKind::FunctionReference,
                source,
            })
    }
}
