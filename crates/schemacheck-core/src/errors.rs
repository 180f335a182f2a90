use thiserror::Error;

/// Result type alias using CompatError
pub type Result<T> = std::result::Result<T, CompatError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of every error
/// the checker and its collaborators can raise. Each kind maps to a stable
/// error code that can be used for programmatic handling, CI annotations and
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison
    /// Baseline and current snapshots describe different providers
    ProviderMismatch,

    // Snapshot structure
    /// A snapshot violates the structural model (nested block on a scalar, absent kind, ...)
    InvalidSnapshot,
    /// A snapshot document declares a format version this build cannot read
    UnsupportedFormat,

    // Configuration
    /// The check configuration could not be parsed or is inconsistent
    InvalidConfig,
    /// A rule name in the configuration does not match any known rule
    UnknownRule,
    /// Caller supplied an argument that cannot be used
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ProviderMismatch => "ERR_PROVIDER_MISMATCH",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::UnknownRule => "ERR_UNKNOWN_RULE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation, resource and attribute path it occurred in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    resource: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            resource: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add resource-type context
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Add attribute path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
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

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the resource context, if any
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Get the attribute path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
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
        if let Some(resource) = &self.resource {
            write!(f, " (resource: {})", resource)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, "\n  caused by: {}", source)?;
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

/// Error taxonomy for schema comparison and snapshot handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompatError {
    // ===== Comparison Errors =====
    /// The two snapshots describe different providers; nothing was compared
    #[error("Provider mismatch: baseline describes '{baseline}' but current describes '{current}'")]
    ProviderMismatch { baseline: String, current: String },

    // ===== Snapshot Structure Errors =====
    /// Generic structural problem in a snapshot document
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// An attribute carries a nested block but is not list- or set-typed
    #[error("Attribute {path} has a nested block but is typed {kind}")]
    BlockOnScalar { path: String, kind: String },

    /// An attribute present in a snapshot uses the absent-kind sentinel
    #[error("Attribute {path} is present but has no type")]
    AbsentKind { path: String },

    /// MinItems exceeds a non-zero MaxItems
    #[error("Attribute {path} has min_items {min} greater than max_items {max}")]
    InvalidItemBounds { path: String, min: u32, max: u32 },

    /// An attribute is marked both optional and required
    #[error("Attribute {path} is both optional and required")]
    ConflictingCardinality { path: String },

    /// The snapshot document declares a format version this build cannot read
    #[error("Unsupported snapshot format version {found} (supported: {supported})")]
    UnsupportedFormat { found: u32, supported: u32 },

    // ===== Configuration Errors =====
    /// A rule name in the configuration is not a known rule
    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    /// The configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON/TOML encoding or decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem error
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },
}

/// Conversion from CompatError to ExError
impl From<CompatError> for ExError {
    fn from(err: CompatError) -> Self {
        match err {
            CompatError::ProviderMismatch { baseline, current } => {
                ExError::new(ExErrorKind::ProviderMismatch)
                    .with_op("diff")
                    .with_message(format!(
                        "baseline provider '{}' does not match current provider '{}'",
                        baseline, current
                    ))
            }

            CompatError::InvalidSnapshot { reason } => {
                ExError::new(ExErrorKind::InvalidSnapshot).with_message(reason)
            }

            CompatError::BlockOnScalar { path, kind } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_path(path)
                    .with_message(format!("Nested block on attribute typed {}", kind))
            }

            CompatError::AbsentKind { path } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_path(path)
                .with_message("Present attribute has no type"),

            CompatError::InvalidItemBounds { path, min, max } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_path(path)
                    .with_message(format!("min_items {} exceeds max_items {}", min, max))
            }

            CompatError::ConflictingCardinality { path } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_path(path)
                    .with_message("Attribute cannot be both optional and required")
            }

            CompatError::UnsupportedFormat { found, supported } => {
                ExError::new(ExErrorKind::UnsupportedFormat).with_message(format!(
                    "Snapshot format version {} is not supported (expected {})",
                    found, supported
                ))
            }

            CompatError::UnknownRule { name } => ExError::new(ExErrorKind::UnknownRule)
                .with_message(format!("No rule named '{}'", name)),

            CompatError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            CompatError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CompatError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to CompatError
impl From<serde_json::Error> for CompatError {
    fn from(err: serde_json::Error) -> Self {
        CompatError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::ProviderMismatch,
            ExErrorKind::InvalidSnapshot,
            ExErrorKind::UnsupportedFormat,
            ExErrorKind::InvalidConfig,
            ExErrorKind::UnknownRule,
            ExErrorKind::InvalidInput,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("load_snapshot")
            .with_resource("acme_widget")
            .with_path("acme_widget.rule.port")
            .with_message("bad");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_INVALID_SNAPSHOT]"));
        assert!(text.contains("load_snapshot"));
        assert!(text.contains("acme_widget.rule.port"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::InvalidSnapshot).with_source(inner);
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::Io)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
