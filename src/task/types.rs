//! Task record types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::markers::{DATE_MARKERS, PRIORITY_MARKERS};
use crate::error::TaskmarkError;

/// Priority levels for tasks.
///
/// The ordering is numeric rather than logical: unprioritized tasks sort
/// after `Medium` and before `Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Priority {
    /// High priority (⏫)
    High = 1,
    /// Medium priority (🔼)
    Medium = 2,
    /// No priority marker.
    #[default]
    None = 3,
    /// Low priority (🔽)
    Low = 4,
}

impl Priority {
    /// Numeric rank used for sorting (1 = high, 4 = low).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The marker symbol for this priority, if it has one.
    #[must_use]
    pub fn symbol(self) -> Option<char> {
        PRIORITY_MARKERS
            .iter()
            .find(|(_, p)| *p == self)
            .map(|(c, _)| *c)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::None => "none",
            Self::Low => "low",
        })
    }
}

impl FromStr for Priority {
    type Err = TaskmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            _ => Err(TaskmarkError::UnknownPriority(s.to_string())),
        }
    }
}

/// The semantic meaning of a date marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    Start,
    Scheduled,
    Due,
    Done,
}

impl DateKind {
    pub const ALL: [Self; 4] = [Self::Start, Self::Scheduled, Self::Due, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Scheduled => "scheduled",
            Self::Due => "due",
            Self::Done => "done",
        }
    }

    /// The first marker symbol listed for this kind.
    #[must_use]
    pub fn symbol(self) -> char {
        DATE_MARKERS
            .iter()
            .find(|(_, k)| *k == self)
            .map_or('?', |(c, _)| *c)
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task extracted from a single checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    /// Leading spaces/tabs before the list marker.
    pub indentation: String,
    /// The character inside the checkbox, exactly as written.
    pub status_char: char,
    /// Free text with every recognized marker removed.
    pub description: String,
    pub priority: Priority,
    pub start_date: Option<String>,
    pub scheduled_date: Option<String>,
    pub due_date: Option<String>,
    pub done_date: Option<String>,
    /// Recurrence phrase, uninterpreted (e.g. "every week").
    pub recurrence: Option<String>,
    /// Block reference including the leading caret (e.g. "^abc123").
    pub block_link: Option<String>,
}

impl Task {
    /// Get the date string for a date kind.
    #[must_use]
    pub fn date(&self, kind: DateKind) -> Option<&str> {
        match kind {
            DateKind::Start => self.start_date.as_deref(),
            DateKind::Scheduled => self.scheduled_date.as_deref(),
            DateKind::Due => self.due_date.as_deref(),
            DateKind::Done => self.done_date.as_deref(),
        }
    }

    pub(crate) fn set_date(&mut self, kind: DateKind, date: String) {
        let slot = match kind {
            DateKind::Start => &mut self.start_date,
            DateKind::Scheduled => &mut self.scheduled_date,
            DateKind::Due => &mut self.due_date,
            DateKind::Done => &mut self.done_date,
        };
        *slot = Some(date);
    }

    /// Convert a date field to a calendar date.
    ///
    /// Parsing only checks the `YYYY-MM-DD` shape, so this returns `None`
    /// both for absent dates and for ones like `2024-13-45`.
    #[must_use]
    pub fn naive_date(&self, kind: DateKind) -> Option<NaiveDate> {
        self.date(kind)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Whether the checkbox holds anything other than a space.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.status_char != ' '
    }

    /// Check if this task has any date set.
    #[must_use]
    pub fn has_dates(&self) -> bool {
        DateKind::ALL.iter().any(|k| self.date(*k).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        let mut priorities = vec![Priority::Low, Priority::None, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::None, Priority::Low]
        );
    }

    #[test]
    fn test_priority_rank() {
        assert_eq!(Priority::High.rank(), 1);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::None.rank(), 3);
        assert_eq!(Priority::Low.rank(), 4);
    }

    #[test]
    fn test_priority_default_is_none() {
        assert_eq!(Priority::default(), Priority::None);
    }

    #[test]
    fn test_priority_display_and_parse() {
        for p in [Priority::High, Priority::Medium, Priority::None, Priority::Low] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(TaskmarkError::UnknownPriority(ref p)) if p == "urgent"
        ));
    }

    #[test]
    fn test_priority_symbol() {
        assert_eq!(Priority::High.symbol(), Some('⏫'));
        assert_eq!(Priority::Low.symbol(), Some('🔽'));
        assert_eq!(Priority::None.symbol(), None);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_date_kind_symbol() {
        assert_eq!(DateKind::Start.symbol(), '🛫');
        assert_eq!(DateKind::Scheduled.symbol(), '⏳');
        assert_eq!(DateKind::Due.symbol(), '📅');
        assert_eq!(DateKind::Done.symbol(), '✅');
    }

    #[test]
    fn test_date_accessors() {
        let mut task = Task::default();
        assert!(!task.has_dates());

        task.set_date(DateKind::Due, "2024-02-30".to_string());
        assert!(task.has_dates());
        assert_eq!(task.date(DateKind::Due), Some("2024-02-30"));
        // shape-only at parse time, calendar-checked here
        assert_eq!(task.naive_date(DateKind::Due), None);

        task.set_date(DateKind::Start, "2024-02-29".to_string());
        assert_eq!(
            task.naive_date(DateKind::Start),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_is_checked() {
        let mut task = Task {
            status_char: ' ',
            ..Task::default()
        };
        assert!(!task.is_checked());
        task.status_char = 'x';
        assert!(task.is_checked());
    }
}
