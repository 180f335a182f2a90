//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the differ, the store
//! and the CLI, so log pipelines can filter on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Schema identifiers
pub const FIELD_PROVIDER: &str = "provider";
pub const FIELD_RESOURCE: &str = "resource";
pub const FIELD_ATTRIBUTE_PATH: &str = "attribute_path";
pub const FIELD_RULE: &str = "rule";

// Collection sizes
pub const FIELD_RESOURCE_COUNT: &str = "resource_count";
pub const FIELD_VIOLATION_COUNT: &str = "violations";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
