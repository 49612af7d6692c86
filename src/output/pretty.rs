use colored::{ColoredString, Colorize};

use super::SourceTasks;
use crate::task::markers::RECURRENCE_MARKER;
use crate::task::{DateKind, Priority, Task};

fn status_box(task: &Task) -> ColoredString {
    let text = format!("[{}]", task.status_char);
    if task.is_checked() {
        text.green()
    } else {
        text.white()
    }
}

fn priority_label(priority: Priority) -> Option<ColoredString> {
    let label = format!("{} {priority}", priority.symbol()?);
    Some(match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.blue(),
        Priority::None => label.normal(),
    })
}

/// One-line summary of a task: status, description, then markers.
fn task_summary(task: &Task) -> String {
    let mut line = format!("{}{} {}", task.indentation, status_box(task), task.description.bold());

    if let Some(label) = priority_label(task.priority) {
        line.push_str(&format!("  {label}"));
    }

    for kind in DateKind::ALL {
        if let Some(date) = task.date(kind) {
            line.push_str(&format!("  {} {}", kind.symbol(), date.yellow()));
        }
    }

    if let Some(recurrence) = &task.recurrence {
        line.push_str(&format!("  {}", format!("{RECURRENCE_MARKER} {recurrence}").cyan()));
    }

    if let Some(link) = &task.block_link {
        line.push_str(&format!("  {}", link.dimmed()));
    }

    line
}

/// Format scan results, grouped by source
pub fn format_sources_pretty(sources: &[SourceTasks]) -> String {
    if sources.is_empty() {
        return "No input".to_string();
    }

    let mut output = String::new();

    for source in sources {
        let noun = if source.count == 1 { "task" } else { "tasks" };
        output.push_str(&format!("{} ({} {noun})\n", source.source.bold(), source.count));

        if source.items.is_empty() {
            output.push_str("  No tasks\n");
            continue;
        }

        output.push_str(&"─".repeat(60));
        output.push('\n');

        let width = source
            .items
            .iter()
            .map(|t| t.line.to_string().len())
            .max()
            .unwrap_or(1);

        for item in &source.items {
            output.push_str(&format!(
                "{} {}\n",
                format!("{:>width$}", item.line).dimmed(),
                task_summary(&item.task)
            ));
        }
    }

    output.trim_end().to_string()
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format!("{} {}\n", status_box(task), task.description.bold());
    output.push_str(&format!(
        "  {}: {:?}\n",
        "Status".dimmed(),
        task.status_char.to_string()
    ));

    if !task.indentation.is_empty() {
        output.push_str(&format!(
            "  {}: {:?}\n",
            "Indentation".dimmed(),
            task.indentation
        ));
    }

    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), task.priority));

    for kind in DateKind::ALL {
        if let Some(date) = task.date(kind) {
            let label = match kind {
                DateKind::Start => "Start",
                DateKind::Scheduled => "Scheduled",
                DateKind::Due => "Due",
                DateKind::Done => "Done",
            };
            output.push_str(&format!("  {}: {}\n", label.dimmed(), date));
        }
    }

    if let Some(recurrence) = &task.recurrence {
        output.push_str(&format!("  {}: {}\n", "Recurrence".dimmed(), recurrence));
    }

    if let Some(link) = &task.block_link {
        output.push_str(&format!("  {}: {}\n", "Block link".dimmed(), link));
    }

    output.trim_end().to_string()
}
