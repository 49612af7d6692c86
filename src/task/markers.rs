//! Marker alphabets for the checklist dialect.
//!
//! These symbols are the contract with document authors: each table maps a
//! marker character to what it means, and the patterns below are built from
//! the tables so the two never drift apart.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{DateKind, Priority};

/// Priority symbols. There is no symbol for [`Priority::None`].
pub const PRIORITY_MARKERS: &[(char, Priority)] = &[
    ('⏫', Priority::High),
    ('🔼', Priority::Medium),
    ('🔽', Priority::Low),
];

/// Date symbols. Several symbols alias the same kind.
pub const DATE_MARKERS: &[(char, DateKind)] = &[
    ('🛫', DateKind::Start),
    ('⏳', DateKind::Scheduled),
    ('⌛', DateKind::Scheduled),
    ('📅', DateKind::Due),
    ('📆', DateKind::Due),
    ('🗓', DateKind::Due),
    ('✅', DateKind::Done),
];

/// Recurrence symbol.
pub const RECURRENCE_MARKER: char = '🔁';

/// Look up the priority for a marker symbol.
#[must_use]
pub fn priority_for(symbol: char) -> Option<Priority> {
    PRIORITY_MARKERS
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|(_, p)| *p)
}

/// Look up the date kind for a marker symbol.
#[must_use]
pub fn date_kind_for(symbol: char) -> Option<DateKind> {
    DATE_MARKERS
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|(_, k)| *k)
}

fn symbol_class<T>(table: &[(char, T)]) -> String {
    table.iter().map(|(c, _)| *c).collect()
}

// Compiled regex patterns

pub(crate) static TASK_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \t]*)[-*] +\[(.)\] *(.*)$")
        .unwrap_or_else(|e| panic!("Invalid task line regex: {e}"))
});

pub(crate) static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let class = symbol_class(PRIORITY_MARKERS);
    Regex::new(&format!(" *([{class}])"))
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

pub(crate) static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // ASCII digits only; `\d` would also accept other Unicode digits
    let class = symbol_class(DATE_MARKERS);
    Regex::new(&format!(
        r" *(?P<kind>[{class}]) *(?P<date>[0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})"
    ))
    .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

pub(crate) static RECURRENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(" *{RECURRENCE_MARKER}([a-zA-Z0-9, !]+)"))
        .unwrap_or_else(|e| panic!("Invalid recurrence regex: {e}"))
});

pub(crate) static BLOCK_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" *(\^[a-zA-Z0-9-]+)").unwrap_or_else(|e| panic!("Invalid block link regex: {e}"))
});
