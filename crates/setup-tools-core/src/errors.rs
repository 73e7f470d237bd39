use crate::config::CommandKind;
use thiserror::Error;

/// Result type alias using SetupError
pub type Result<T> = std::result::Result<T, SetupError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure raised by a dispatched unit, a collaborator or the
/// orchestrator itself maps onto one of these kinds. Each kind has a stable
/// code used in log events and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidInput,
    InvalidConfig,

    // Lookup
    NotFound,
    AlreadyExists,

    // Dispatch
    /// A dotted path could not be resolved to a function
    Resolution,
    /// A resolved function or registered command failed
    Execution,
    /// The initialization-state query failed (recovered locally)
    InitializationCheck,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Resolution => "ERR_RESOLUTION",
            ExErrorKind::Execution => "ERR_EXECUTION",
            ExErrorKind::InitializationCheck => "ERR_INITIALIZATION_CHECK",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Dispatched units report failures with this type. It carries a kind for
/// programmatic handling plus the operation, target (command name, dotted
/// path, fixture, ...) and an optional chained cause.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    target: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            target: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add target context (command name, dotted path, file)
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(target) = &self.target {
            write!(f, " (target: {})", target)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors surfaced by the orchestrator and dispatcher
#[derive(Error, Debug, Clone)]
pub enum SetupError {
    /// A function reference could not be resolved
    #[error("Could not import function '{path}': {source}")]
    Resolution {
        path: String,
        #[source]
        source: ExError,
    },

    /// A resolved function or registered command failed during invocation
    #[error("Error executing {kind} '{name}': {source}")]
    Execution {
        name: String,
        kind: CommandKind,
        #[source]
        source: ExError,
    },

    /// The initialization-state query failed
    ///
    /// The orchestrator recovers from this locally; it is only surfaced to
    /// callers that query the collaborator directly.
    #[error("Could not determine initialization state: {source}")]
    InitializationCheck {
        #[source]
        source: ExError,
    },

    /// The configuration file is malformed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The configuration file could not be read
    #[error("Could not read configuration file {path}: {reason}")]
    ConfigIo { path: String, reason: String },
}

impl SetupError {
    /// The command name or dotted path this error refers to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            SetupError::Resolution { path, .. } => Some(path),
            SetupError::Execution { name, .. } => Some(name),
            SetupError::ConfigIo { path, .. } => Some(path),
            SetupError::InitializationCheck { .. } | SetupError::InvalidConfig { .. } => None,
        }
    }
}

impl From<SetupError> for ExError {
    fn from(err: SetupError) -> Self {
        match err {
            SetupError::Resolution { path, source } => ExError::new(ExErrorKind::Resolution)
                .with_op("resolve_function")
                .with_target(path)
                .with_message("Could not import function")
                .with_source(source),

            SetupError::Execution { name, kind, source } => ExError::new(ExErrorKind::Execution)
                .with_op("dispatch")
                .with_target(name)
                .with_message(format!("Error executing {}", kind))
                .with_source(source),

            SetupError::InitializationCheck { source } => {
                ExError::new(ExErrorKind::InitializationCheck)
                    .with_op("is_initialized")
                    .with_message("Could not determine initialization state")
                    .with_source(source)
            }

            SetupError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(reason),

            SetupError::ConfigIo { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_target(path)
                .with_message(reason),
        }
    }
}
