//! Two-phase orchestration
//!
//! One invocation walks a fixed sequence:
//! 1. ask the initialization-state collaborator whether setup already ran
//!    (a failed query counts as "already ran", with a warning)
//! 2. if not, dispatch the `on_initial` phase
//! 3. always dispatch the `always_run` phase
//!
//! The first failing unit ends the invocation.

use crate::config::{CommandDescriptor, Phase, SetupConfig};
use crate::dispatch::{CommandRegistry, Dispatcher, FunctionResolver, Handler};
use crate::errors::{ExError, Result, SetupError};
use crate::output::OutputSink;
use crate::{log_op_end, log_op_error, log_op_start};
use setup_tools_core_types::RunId;
use std::time::Instant;

/// Answers whether the one-time setup already ran
pub trait InitializationState {
    fn is_initialized(&self) -> std::result::Result<bool, ExError>;
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Initialization state as acted upon (after fallback)
    pub initialized: bool,
    /// Identifiers of the dispatched units, in order
    pub dispatched: Vec<String>,
}

/// Drives both phases for one invocation
pub struct Orchestrator<'a> {
    config: &'a SetupConfig,
    state: &'a dyn InitializationState,
    dispatcher: Dispatcher<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a SetupConfig,
        state: &'a dyn InitializationState,
        resolver: &'a dyn FunctionResolver,
        registry: &'a dyn CommandRegistry,
    ) -> Self {
        Self {
            config,
            state,
            dispatcher: Dispatcher::new(resolver, registry),
        }
    }

    /// Ordered commands for `phase` under the configured environment
    pub fn plan(&self, phase: Phase) -> Vec<CommandDescriptor> {
        self.config.plan(phase)
    }

    /// Query the collaborator, treating a failed query as initialized
    ///
    /// The failure is reported at warning level in both the log and the
    /// output, and the `on_initial` phase is skipped.
    pub fn is_initialized(&self, handler: &mut Handler<'_>) -> bool {
        match self.state.is_initialized() {
            Ok(initialized) => initialized,
            Err(source) => {
                let err = SetupError::InitializationCheck { source };
                tracing::warn!(
                    op = "is_initialized",
                    error = %err,
                    "initialization state unknown; assuming already initialized"
                );
                handler.warning(format!(
                    "Could not determine initialization state ({}); assuming the database is already initialized.",
                    err
                ));
                true
            }
        }
    }

    /// Run both phases
    pub fn run(&self, out: &mut dyn OutputSink) -> Result<RunReport> {
        let run_id = RunId::new();
        let span = tracing::info_span!(
            "setup_run",
            run_id = %run_id,
            environment = self.config.environment()
        );
        let _guard = span.enter();

        let started = Instant::now();
        log_op_start!("run");

        let result = self.run_phases(out);

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(report) => {
                log_op_end!(
                    "run",
                    duration_ms = duration_ms,
                    initialized = report.initialized,
                    dispatched = report.dispatched.len()
                );
            }
            Err(err) => {
                log_op_error!("run", err.clone(), duration_ms = duration_ms);
            }
        }

        result
    }

    fn run_phases(&self, out: &mut dyn OutputSink) -> Result<RunReport> {
        let mut handler = Handler::new(out, &self.config.settings);
        let mut dispatched = Vec::new();

        if self.config.commands.is_empty() {
            handler.warning("No setup-tools configuration found; nothing to run.");
        }

        handler.notice("Running initialization scripts (setup-tools):");
        let initialized = self.is_initialized(&mut handler);
        if initialized {
            handler.info("Database already initialized... skipping.");
        } else {
            self.run_phase(Phase::OnInitial, &mut handler, &mut dispatched)?;
        }

        handler.heading("Running setup scripts (setup-tools):");
        self.run_phase(Phase::AlwaysRun, &mut handler, &mut dispatched)?;

        Ok(RunReport {
            initialized,
            dispatched,
        })
    }

    fn run_phase(
        &self,
        phase: Phase,
        handler: &mut Handler<'_>,
        dispatched: &mut Vec<String>,
    ) -> Result<()> {
        let commands = self.plan(phase);
        tracing::debug!(
            phase = phase.as_str(),
            plan_len = commands.len(),
            "resolved phase"
        );

        if commands.is_empty() {
            handler.info(format!("No {} commands configured.", phase));
            return Ok(());
        }

        self.dispatcher.dispatch_all(&commands, handler)?;
        dispatched.extend(commands.iter().map(|c| c.identifier().to_string()));
        Ok(())
    }
}
