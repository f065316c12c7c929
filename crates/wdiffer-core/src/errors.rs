use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using WdiffError
pub type Result<T> = std::result::Result<T, WdiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions and the CLI's exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A supplied input file cannot be opened or read
    InputUnavailable,
    /// Malformed option values supplied by the caller
    InvalidConfiguration,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InputUnavailable => "ERR_INPUT_UNAVAILABLE",
            ExErrorKind::InvalidConfiguration => "ERR_INVALID_CONFIGURATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification kind plus optional context (operation name,
/// offending path) for structured logging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    /// Get the path context, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for wdiffer operations
///
/// The diff engine itself is total; every variant here is raised by the
/// collaborators around it (file reading, option handling, output).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WdiffError {
    /// An input file could not be opened or decoded
    #[error("Cannot read {}: {reason}", .path.display())]
    InputUnavailable { path: PathBuf, reason: String },

    /// Option values supplied by the caller are malformed
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Writing the rendered output failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl WdiffError {
    /// Build an `InputUnavailable` error from an I/O failure on `path`
    pub fn input_unavailable(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        WdiffError::InputUnavailable {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Build an `InvalidConfiguration` error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        WdiffError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Conversion from WdiffError to ExError
impl From<WdiffError> for ExError {
    fn from(err: WdiffError) -> Self {
        match err {
            WdiffError::InputUnavailable { path, reason } => {
                ExError::new(ExErrorKind::InputUnavailable)
                    .with_op("read_input")
                    .with_path(path)
                    .with_message(reason)
            }

            WdiffError::InvalidConfiguration { reason } => {
                ExError::new(ExErrorKind::InvalidConfiguration)
                    .with_message(format!("Invalid configuration: {}", reason))
            }

            WdiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            WdiffError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to WdiffError
impl From<serde_json::Error> for WdiffError {
    fn from(err: serde_json::Error) -> Self {
        WdiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Output-side I/O failures; input failures go through `input_unavailable`
impl From<std::io::Error> for WdiffError {
    fn from(err: std::io::Error) -> Self {
        WdiffError::Io {
            message: err.to_string(),
        }
    }
}
