//! Line annotator.
//!
//! Turns a single checklist line such as
//! `"  - [ ] water plants 🔼 📅 2024-06-01 🔁 every week ^plants"`
//! into a [`Task`].

use regex::Regex;

use super::markers::{
    date_kind_for, priority_for, BLOCK_LINK_PATTERN, DATE_PATTERN, PRIORITY_PATTERN,
    RECURRENCE_PATTERN, TASK_LINE_PATTERN,
};
use super::types::{Priority, Task};

/// Parse one line into a task.
///
/// Returns `None` when the line is not a task line: it must be optional
/// spaces/tabs, `-` or `*`, at least one space, then a checkbox holding
/// exactly one character.
///
/// # Examples
///
/// ```
/// use taskmark::task::{annotate, Priority};
///
/// let task = annotate("- [ ] file taxes ⏫ 📅 2024-04-15").unwrap();
/// assert_eq!(task.description, "file taxes");
/// assert_eq!(task.priority, Priority::High);
/// assert_eq!(task.due_date.as_deref(), Some("2024-04-15"));
///
/// assert!(annotate("file taxes").is_none());
/// ```
#[must_use]
pub fn annotate(line: &str) -> Option<Task> {
    let caps = TASK_LINE_PATTERN.captures(line)?;
    let indentation = caps.get(1).map_or("", |m| m.as_str());
    let status_char = caps.get(2)?.as_str().chars().next()?;
    let candidate = caps.get(3).map_or("", |m| m.as_str());

    let mut task = Task {
        indentation: indentation.to_string(),
        status_char,
        ..Task::default()
    };

    // Extract priority (first symbol only)
    task.priority = PRIORITY_PATTERN
        .captures(candidate)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(priority_for)
        .unwrap_or(Priority::None);

    // Extract dates; a later marker of the same kind overwrites an earlier one
    for caps in DATE_PATTERN.captures_iter(candidate) {
        let kind = caps
            .name("kind")
            .and_then(|m| m.as_str().chars().next())
            .and_then(date_kind_for);
        if let (Some(kind), Some(date)) = (kind, caps.name("date")) {
            task.set_date(kind, date.as_str().to_string());
        }
    }

    // Extract recurrence (first occurrence)
    task.recurrence = first_capture(&RECURRENCE_PATTERN, candidate).map(|r| r.trim().to_string());

    // Extract block link (first occurrence)
    task.block_link = first_capture(&BLOCK_LINK_PATTERN, candidate).map(str::to_string);

    task.description = strip_markers(candidate);

    Some(task)
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Remove marker spans from the description, in a fixed order.
///
/// Each step runs against the output of the previous one. Only surrounding
/// whitespace is trimmed; runs of spaces between words are kept.
fn strip_markers(candidate: &str) -> String {
    let mut remaining = PRIORITY_PATTERN.replace(candidate, "").into_owned();
    remaining = DATE_PATTERN.replace_all(&remaining, "").into_owned();
    remaining = RECURRENCE_PATTERN.replace(&remaining, "").into_owned();
    remaining = BLOCK_LINK_PATTERN.replace(&remaining, "").into_owned();
    remaining.trim().to_string()
}
