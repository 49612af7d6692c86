//! Scan command implementation.
//!
//! This module implements `taskmark scan`, which lists the tasks in one or
//! more documents.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{OutputFormat, ScanArgs, SortOrder};
use crate::config::Config;
use crate::error::TaskmarkError;
use crate::output::{format_sources, SourceTasks};
use crate::task::{LocatedTask, Scanner};

const STDIN_NAME: &str = "<stdin>";

/// Execute the scan command.
///
/// Flags override the config file's `scan` section.
///
/// # Errors
///
/// Returns an error if an input cannot be read, the status filter is
/// invalid, or output formatting fails.
pub fn scan(args: ScanArgs, config: &Config, format: OutputFormat) -> Result<String, TaskmarkError> {
    let filter = args
        .status
        .as_deref()
        .unwrap_or(config.scan.status_filter.as_str());
    let order = args.sort.unwrap_or(config.scan.sort);
    let scanner = Scanner::new(filter)?;

    let mut sources = Vec::new();
    for (name, document) in read_sources(&args.files)? {
        let mut tasks = scanner.parse_located(&document);
        if let Some(priority) = args.priority {
            tasks.retain(|t| t.task.priority == priority);
        }
        sort_tasks(&mut tasks, order);
        debug!(source = %name, count = tasks.len(), "scanned source");
        sources.push(SourceTasks::new(name, tasks));
    }

    format_sources(&sources, format)
}

/// Read every input, using stdin for `-` or when no files are given.
///
/// # Errors
///
/// Returns `TaskmarkError::Io` if a file or stdin cannot be read.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<(String, String)>, TaskmarkError> {
    if files.is_empty() {
        return Ok(vec![(STDIN_NAME.to_string(), read_stdin()?)]);
    }

    files
        .iter()
        .map(|path| -> Result<(String, String), TaskmarkError> {
            if path.as_os_str() == "-" {
                Ok((STDIN_NAME.to_string(), read_stdin()?))
            } else {
                Ok((path.display().to_string(), read_file(path)?))
            }
        })
        .collect()
}

fn read_stdin() -> Result<String, TaskmarkError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, TaskmarkError> {
    debug!(path = %path.display(), "reading");
    std::fs::read_to_string(path).map_err(|e| {
        TaskmarkError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })
}

/// Order tasks in place. Sorting is stable, so ties keep document order.
pub fn sort_tasks(tasks: &mut [LocatedTask], order: SortOrder) {
    match order {
        SortOrder::Document => {}
        SortOrder::Priority => tasks.sort_by_key(|t| t.task.priority),
        SortOrder::Due => tasks.sort_by(|a, b| {
            match (&a.task.due_date, &b.task.due_date) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        }),
    }
}
