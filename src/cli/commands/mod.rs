//! Command implementations for taskmark.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod scan;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use scan::{read_sources, scan, sort_tasks};

use crate::cli::args::OutputFormat;
use crate::error::TaskmarkError;
use crate::output::format_task;
use crate::task::annotate;

/// Execute line command
///
/// # Errors
///
/// Returns `TaskmarkError::NotATaskLine` if the text is not a task line, or
/// an error if output formatting fails.
pub fn line(text: &str, format: OutputFormat) -> Result<String, TaskmarkError> {
    let task = annotate(text).ok_or_else(|| TaskmarkError::NotATaskLine(text.to_string()))?;
    format_task(&task, format)
}
