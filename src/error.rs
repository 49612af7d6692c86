//! Error types for taskmark.
//!
//! A line that is not a task line is not an error: [`crate::task::annotate`]
//! returns `None` for it. These variants cover the layers around the parser.

use thiserror::Error;

/// Errors produced by taskmark.
#[derive(Debug, Error)]
pub enum TaskmarkError {
    /// The status filter did not compile into a valid pattern.
    #[error("Invalid status filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: regex::Error,
    },

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded, saved, or understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A priority name other than high, medium, none or low.
    #[error("Unknown priority '{0}' (expected high, medium, none or low)")]
    UnknownPriority(String),

    /// Input given to `taskmark line` is not a task line.
    #[error("Not a task line: {0:?}")]
    NotATaskLine(String),
}
