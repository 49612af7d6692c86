//! Document scanner.
//!
//! Finds every task line in a document whose checkbox character matches a
//! status filter. The filter is a regex character-class fragment inserted
//! verbatim into `\[...\]`, e.g. `.` (anything), `" "` (open), `x` or `[xX]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use super::annotate::annotate;
use super::types::Task;
use crate::error::TaskmarkError;

/// Status filter that accepts any checkbox character.
pub const ANY_STATUS: &str = ".";

static DEFAULT_SCANNER: Lazy<Scanner> = Lazy::new(|| {
    Scanner::new(ANY_STATUS).unwrap_or_else(|e| panic!("Invalid default scanner regex: {e}"))
});

/// A task line found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based line number within the document.
    pub number: usize,
    /// The full line text, indentation included.
    pub text: &'a str,
}

/// A parsed task together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedTask {
    /// 1-based line number within the document.
    pub line: usize,
    #[serde(flatten)]
    pub task: Task,
}

/// Compiled task-line pattern for one status filter.
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
    filter: String,
}

impl Scanner {
    /// Build a scanner for the given status filter.
    ///
    /// The filter is not escaped.
    ///
    /// # Errors
    ///
    /// Returns `TaskmarkError::InvalidFilter` if the resulting pattern does
    /// not compile.
    pub fn new(status_filter: &str) -> Result<Self, TaskmarkError> {
        let pattern = Regex::new(&format!(r"(?m)^[ \t]*[-*] +\[{status_filter}\].*$")).map_err(
            |source| TaskmarkError::InvalidFilter {
                filter: status_filter.to_string(),
                source,
            },
        )?;
        Ok(Self {
            pattern,
            filter: status_filter.to_string(),
        })
    }

    /// The status filter this scanner was built with.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Iterate over matching lines in document order.
    pub fn scan<'a>(&'a self, document: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.find_iter(document).map(|m| m.as_str())
    }

    /// Like [`Scanner::scan`], with line numbers attached.
    pub fn scan_numbered<'a>(
        &'a self,
        document: &'a str,
    ) -> impl Iterator<Item = ScannedLine<'a>> + 'a {
        let mut number = 1;
        let mut offset = 0;
        self.pattern.find_iter(document).map(move |m| {
            number += document[offset..m.start()].matches('\n').count();
            offset = m.start();
            ScannedLine {
                number,
                text: m.as_str(),
            }
        })
    }

    /// Scan and annotate every matching line.
    #[must_use]
    pub fn parse(&self, document: &str) -> Vec<Task> {
        let tasks: Vec<Task> = self
            .scan(document)
            .filter_map(|line| {
                let task = annotate(line);
                if task.is_none() {
                    trace!(line, "scanned line rejected by annotator");
                }
                task
            })
            .collect();
        debug!(filter = %self.filter, count = tasks.len(), "parsed document");
        tasks
    }

    /// Like [`Scanner::parse`], keeping each task's line number.
    #[must_use]
    pub fn parse_located(&self, document: &str) -> Vec<LocatedTask> {
        let tasks: Vec<LocatedTask> = self
            .scan_numbered(document)
            .filter_map(|scanned| {
                annotate(scanned.text).map(|task| LocatedTask {
                    line: scanned.number,
                    task,
                })
            })
            .collect();
        debug!(filter = %self.filter, count = tasks.len(), "parsed document with locations");
        tasks
    }
}

impl Default for Scanner {
    fn default() -> Self {
        DEFAULT_SCANNER.clone()
    }
}

/// Find every task line in a document, whatever its status.
///
/// # Examples
///
/// ```
/// let doc = "# Groceries\n- [ ] milk\n- [x] eggs\nnotes\n";
/// assert_eq!(taskmark::task::scan(doc), vec!["- [ ] milk", "- [x] eggs"]);
/// ```
#[must_use]
pub fn scan(document: &str) -> Vec<&str> {
    DEFAULT_SCANNER.scan(document).collect()
}

/// Find task lines whose status matches `status_filter`.
///
/// # Errors
///
/// Returns `TaskmarkError::InvalidFilter` if the filter is not a valid
/// character-class fragment.
pub fn scan_with_filter<'a>(
    document: &'a str,
    status_filter: &str,
) -> Result<Vec<&'a str>, TaskmarkError> {
    let scanner = Scanner::new(status_filter)?;
    // the slices borrow only the document, not the local scanner
    Ok(scanner
        .pattern
        .find_iter(document)
        .map(|m| m.as_str())
        .collect())
}

/// Scan a document and annotate each task line.
///
/// # Errors
///
/// Returns `TaskmarkError::InvalidFilter` if the filter is not a valid
/// character-class fragment.
pub fn parse_document(document: &str, status_filter: &str) -> Result<Vec<Task>, TaskmarkError> {
    Ok(Scanner::new(status_filter)?.parse(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "
- [x] one
- [ ] two
- [ ] three";

    #[test]
    fn test_multiple_tasks() {
        let doc = "\n- [ ] one\n- [ ] two\n";
        assert_eq!(scan(doc).len(), 2);
    }

    #[test]
    fn test_indented_tasks() {
        let doc = "\n  - [ ] one\n  - [ ] two";
        assert_eq!(scan(doc), vec!["  - [ ] one", "  - [ ] two"]);
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(scan_with_filter(DOCUMENT, " ").unwrap().len(), 2);
        assert_eq!(scan_with_filter(DOCUMENT, "x").unwrap().len(), 1);
        assert_eq!(scan_with_filter(DOCUMENT, ".").unwrap().len(), 3);
        assert_eq!(scan(DOCUMENT).len(), 3);
    }

    fn open_lines(document: &str) -> Vec<&str> {
        scan_with_filter(document, " ").unwrap()
    }

    #[test]
    fn test_filtered_lines_outlive_scanner() {
        let doc = String::from("- [ ] a\n- [x] b\n- [ ] c");
        let lines = open_lines(&doc);
        assert_eq!(lines, vec!["- [ ] a", "- [ ] c"]);
    }

    #[test]
    fn test_character_class_filter() {
        let doc = "- [x] a\n- [X] b\n- [ ] c\n- [/] d";
        assert_eq!(scan_with_filter(doc, "[xX]").unwrap(), vec!["- [x] a", "- [X] b"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let doc = "- [ ] first\ntext\n* [x] second\n\t- [ ] third";
        assert_eq!(scan(doc), vec!["- [ ] first", "* [x] second", "\t- [ ] third"]);
    }

    #[test]
    fn test_non_task_lines_skipped() {
        let doc = "# Heading\nsome prose - [ ] not a task\n- [] empty\n-[ ] tight\n- [ ]";
        assert_eq!(scan(doc), vec!["- [ ]"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_invalid_filter() {
        let err = Scanner::new("[").unwrap_err();
        assert!(matches!(err, TaskmarkError::InvalidFilter { ref filter, .. } if filter == "["));
    }

    #[test]
    fn test_scan_numbered() {
        let doc = "# Title\n- [ ] one\n\n- [x] two\n";
        let scanner = Scanner::default();
        let lines: Vec<_> = scanner.scan_numbered(doc).collect();
        assert_eq!(
            lines,
            vec![
                ScannedLine {
                    number: 2,
                    text: "- [ ] one"
                },
                ScannedLine {
                    number: 4,
                    text: "- [x] two"
                },
            ]
        );
    }

    #[test]
    fn test_parse_located() {
        let doc = "intro\n- [ ] a 🔽\nmore\n  * [x] b\n";
        let tasks = Scanner::new("x").unwrap().parse_located(doc);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].line, 4);
        assert_eq!(tasks[0].task.indentation, "  ");
        assert_eq!(tasks[0].task.description, "b");
    }

    #[test]
    fn test_located_task_serializes_flat() {
        let tasks = Scanner::default().parse_located("- [ ] a ^id");
        let value = serde_json::to_value(&tasks[0]).unwrap();
        assert_eq!(value["line"], 1);
        assert_eq!(value["description"], "a");
        assert_eq!(value["block_link"], "^id");
        assert_eq!(value["priority"], "none");
    }

    #[test]
    fn test_parse_document() {
        let tasks = parse_document("- [ ] a ⏫\n- [x] b ✅ 2024-01-01\n", ".").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "a");
        assert_eq!(tasks[1].status_char, 'x');
        assert_eq!(tasks[1].done_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_parse_drops_lines_the_annotator_rejects() {
        // a two-character filter matches "[xx]", which is not a task line
        let tasks = parse_document("- [xx] a\n- [ ] b", "(?:..| )").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "b");
    }

    #[test]
    fn test_crlf_document() {
        let tasks = parse_document("- [ ] a\r\n- [ ] b\r\n", ".").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "a");
    }
}
