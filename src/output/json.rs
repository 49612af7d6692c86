//! JSON output formatting for taskmark.

use serde_json::json;

use super::SourceTasks;
use crate::error::TaskmarkError;
use crate::task::Task;

/// Format scan results as JSON
///
/// # Errors
///
/// Returns `TaskmarkError::Json` if JSON serialization fails.
pub fn format_sources_json(sources: &[SourceTasks]) -> Result<String, TaskmarkError> {
    let output = json!({
        "count": sources.iter().map(|s| s.count).sum::<usize>(),
        "sources": sources
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TaskmarkError::Json` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TaskmarkError> {
    Ok(serde_json::to_string_pretty(task)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{annotate, Scanner};

    #[test]
    fn test_format_task_json() {
        let task = annotate("- [x] ship it ⏫ ✅ 2024-03-01").unwrap();
        let json = format_task_json(&task).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["status_char"], "x");
        assert_eq!(parsed["description"], "ship it");
        assert_eq!(parsed["priority"], "high");
        assert_eq!(parsed["done_date"], "2024-03-01");
        assert!(parsed["due_date"].is_null());
    }

    #[test]
    fn test_format_task_json_round_trips() {
        let task = annotate("  * [ ] a 🔁 every day ^id").unwrap();
        let json = format_task_json(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_format_sources_json() {
        let scanner = Scanner::default();
        let sources = vec![
            SourceTasks::new("a.md", scanner.parse_located("- [ ] one\n- [x] two")),
            SourceTasks::new("b.md", scanner.parse_located("text\n- [ ] three")),
        ];
        let json = format_sources_json(&sources).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 3);
        assert_eq!(parsed["sources"][0]["source"], "a.md");
        assert_eq!(parsed["sources"][0]["count"], 2);
        assert_eq!(parsed["sources"][1]["items"][0]["line"], 2);
        assert_eq!(parsed["sources"][1]["items"][0]["description"], "three");
    }

    #[test]
    fn test_format_sources_json_empty() {
        let json = format_sources_json(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["count"], 0);
        assert_eq!(parsed["sources"].as_array().unwrap().len(), 0);
    }
}
