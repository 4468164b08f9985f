//! Unified error types for mar-tools.
//!
//! Domain conditions (missing or malformed case fields) are *not* errors:
//! they resolve to score 0 and are reported through the missing-field lists.
//! This hierarchy covers the boundaries: file IO, case-file parsing,
//! configuration and report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mar-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MarToolsError {
    /// Errors during case-file parsing
    #[error("Failed to parse case file: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Unknown module key: '{module}' (the module set is fixed)")]
    UnknownModule { module: String },

    #[error("Module '{module}' must be an object of field → value pairs")]
    InvalidModuleBody { module: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Malformed pairwise matrix: {0}")]
    InvalidMatrix(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for mar-tools operations
pub type Result<T> = std::result::Result<T, MarToolsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MarToolsError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an unknown module key
    pub fn unknown_module(module: impl Into<String>) -> Self {
        Self::parse(
            "case record uses a module outside the fixed schema",
            ParseErrorKind::UnknownModule {
                module: module.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MarToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MarToolsError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MarToolsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Extension trait for converting `Option` to `Result` with context.
pub trait OptionContext<T> {
    /// Convert `None` into a validation error with the given message.
    fn ok_or_validation(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn ok_or_validation(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| MarToolsError::validation(message))
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MarToolsError, new_ctx: &str) -> MarToolsError {
    match err {
        MarToolsError::Parse {
            context: existing,
            source,
        } => MarToolsError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MarToolsError::Report {
            context: existing,
            source,
        } => MarToolsError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MarToolsError::Io {
            path,
            message,
            source,
        } => MarToolsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MarToolsError::Config(msg) => MarToolsError::Config(chain_context(new_ctx, &msg)),
        MarToolsError::Validation(msg) => MarToolsError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
