//! Error types for outline parsing and JSON-to-outline serialization.

use thiserror::Error;

/// Fixed output returned in place of a result when outline text cannot be converted.
pub const INVALID_FORMAT: &str = "// Error: Invalid Format";

/// Fixed output returned in place of a result when JSON input cannot be converted.
pub const INVALID_JSON: &str = "// Error: Invalid JSON";

/// Errors that can occur while converting in either direction.
#[derive(Error, Debug)]
pub enum GdobError {
    /// The input string was not valid JSON (outline direction).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The outline text could not be interpreted (JSON direction).
    /// Includes the 1-based line number where the error was detected.
    #[error("outline parse error at line {line}: {message}")]
    OutlineParse { line: usize, message: String },

    /// Container nesting went past the configured limit.
    #[error("nesting exceeds the maximum depth of {max}")]
    DepthLimit { max: usize },

    /// A direction name that is neither `to-json` nor `to-outline`.
    #[error("unknown direction '{0}' (expected to-json or to-outline)")]
    UnknownDirection(String),
}

/// Convenience alias used throughout gdob-core.
pub type Result<T> = std::result::Result<T, GdobError>;
