//! Canonical schema constants for structured logging
//!
//! These constants keep field names identical across the dispatcher,
//! the store and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Dispatch identifiers
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_COMMAND_KIND: &str = "kind";
pub const FIELD_PHASE: &str = "phase";
pub const FIELD_ENVIRONMENT: &str = "environment";

// Collection sizes
pub const FIELD_PLAN_LEN: &str = "plan_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
