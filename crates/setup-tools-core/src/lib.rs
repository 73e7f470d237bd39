//! setup-tools core - phase resolution and command dispatch
//!
//! This crate provides the deploy-time orchestration kernel:
//! - Configuration model (environment → phase → command descriptors) and loader
//! - Pure phase resolver
//! - Dispatcher over registered commands and dotted-path function references
//! - Two-phase orchestrator guarded by an initialization-state check
//! - Structured error and logging facilities shared by the other crates

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod logging_facility;
pub mod orchestrator;
pub mod output;
pub mod resolver;

// Used by the logging macros so callers don't need a direct dependency
#[doc(hidden)]
pub use setup_tools_core_types as core_types;

// Re-export commonly used types
pub use config::{CommandDescriptor, CommandKind, Configuration, Phase, SetupConfig, Settings};
pub use dispatch::{
    CommandRegistry, CommandTable, Dispatcher, FunctionResolver, FunctionTable, Handler,
    ManagementCommand, ScriptFunction,
};
pub use errors::{ExError, ExErrorKind, Result, SetupError};
pub use orchestrator::{InitializationState, Orchestrator, RunReport};
pub use output::{BufferedOutput, ConsoleOutput, OutputSink, Style};
pub use resolver::resolve;
