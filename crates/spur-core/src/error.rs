//! Error types and exit codes for spur
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (missing graph file, IO)
//! - 2: Usage error (bad flags/args, unknown start node)
//! - 3: Data error (malformed matrix, duplicate labels, bad index)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the spur CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, invalid index (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during spur operations
#[derive(Error, Debug)]
pub enum SpurError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("start node '{label}' is not in the graph")]
    InvalidStartNode { label: String },

    #[error("no node labeled '{label}' in the graph")]
    UnknownNode { label: String },

    // Data errors (exit code 3)
    #[error("malformed graph file {path:?}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("duplicate node label '{label}'")]
    DuplicateLabel { label: String },

    #[error("node index {index} out of range (graph has {len} nodes)")]
    IndexOutOfRange { index: usize, len: usize },

    // Generic failures (exit code 1)
    #[error("cannot open graph file {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SpurError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SpurError::UnknownFormat(_)
            | SpurError::DuplicateFormat
            | SpurError::UsageError(_)
            | SpurError::InvalidStartNode { .. }
            | SpurError::UnknownNode { .. } => ExitCode::Usage,

            // Data errors
            SpurError::MalformedInput { .. }
            | SpurError::DuplicateLabel { .. }
            | SpurError::IndexOutOfRange { .. } => ExitCode::Data,

            // Generic failures
            SpurError::GraphNotFound { .. }
            | SpurError::Io(_)
            | SpurError::Json(_)
            | SpurError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SpurError::UnknownFormat(_) => "unknown_format",
            SpurError::DuplicateFormat => "duplicate_format",
            SpurError::UsageError(_) => "usage_error",
            SpurError::InvalidStartNode { .. } => "invalid_start_node",
            SpurError::UnknownNode { .. } => "unknown_node",
            SpurError::MalformedInput { .. } => "malformed_input",
            SpurError::DuplicateLabel { .. } => "duplicate_label",
            SpurError::IndexOutOfRange { .. } => "index_out_of_range",
            SpurError::GraphNotFound { .. } => "graph_not_found",
            SpurError::Io(_) => "io_error",
            SpurError::Json(_) => "json_error",
            SpurError::Other(_) => "other",
        }
    }
}

/// Result type alias for spur operations
pub type Result<T> = std::result::Result<T, SpurError>;
