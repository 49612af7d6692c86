//! Output formatting for taskmark.
//!
//! This module provides formatters for displaying parsed tasks in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::TaskmarkError;
use crate::task::{LocatedTask, Task};

pub use json::*;
pub use pretty::*;

/// Tasks found in one input document.
#[derive(Debug, Clone, Serialize)]
pub struct SourceTasks {
    /// File path, or `<stdin>`.
    pub source: String,
    pub count: usize,
    pub items: Vec<LocatedTask>,
}

impl SourceTasks {
    #[must_use]
    pub fn new(source: impl Into<String>, items: Vec<LocatedTask>) -> Self {
        Self {
            source: source.into(),
            count: items.len(),
            items,
        }
    }
}

/// Format scan results based on output format
///
/// # Errors
///
/// Returns `TaskmarkError::Json` if JSON serialization fails.
pub fn format_sources(sources: &[SourceTasks], format: OutputFormat) -> Result<String, TaskmarkError> {
    match format {
        OutputFormat::Pretty => Ok(format_sources_pretty(sources)),
        OutputFormat::Json => format_sources_json(sources),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskmarkError::Json` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, TaskmarkError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}
