use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::task::Priority;

#[derive(Parser)]
#[command(name = "taskmark")]
#[command(about = "Extract structured tasks from checklist-style markdown notes")]
#[command(long_about = "taskmark - checklist task extractor

Finds lines like '- [ ] water plants 🔼 📅 2024-06-01' in plain-text notes
and reports each one as a structured task: checkbox status, priority,
start/scheduled/due/done dates, recurrence and block link.

QUICK START:
  taskmark scan notes.md             List every task in a file
  taskmark scan --status ' ' *.md    Only open tasks
  cat notes.md | taskmark scan       Read from stdin
  taskmark line '- [x] done ✅ 2024-01-01'   Inspect a single line

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskmark <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "TASKMARK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Ordering of scan results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep document order.
    #[default]
    Document,
    /// High, medium, none, low.
    Priority,
    /// Earliest due date first; tasks without one last.
    Due,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks found in documents
    ///
    /// Reads each file (or stdin when no file or '-' is given) and prints
    /// every checklist task whose status character matches the filter.
    ///
    /// # Examples
    ///
    ///   taskmark scan notes.md
    ///   taskmark scan --status ' ' todo.md        Open tasks only
    ///   taskmark scan --status '[xX]' *.md        Completed tasks
    ///   taskmark scan --sort priority -o json notes.md
    ///
    /// # Markers
    ///
    ///   Priority:    ⏫ high, 🔼 medium, 🔽 low
    ///   Dates:       🛫 start, ⏳/⌛ scheduled, 📅/📆/🗓 due, ✅ done
    ///   Recurrence:  🔁 every week
    ///   Block link:  ^block-id
    #[command(alias = "s")]
    Scan(ScanArgs),

    /// Parse a single line
    ///
    /// Prints the task extracted from TEXT, or fails if TEXT is not a task
    /// line.
    ///
    /// # Examples
    ///
    ///   taskmark line '- [ ] call mom 🔼 📅 2024-05-12'
    #[command(alias = "l")]
    Line {
        /// The line to parse
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: taskmark completions bash > ~/.bash_completion.d/taskmark
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for `taskmark scan`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Files to scan ('-' for stdin)
    pub files: Vec<PathBuf>,

    /// Status filter, a regex character-class fragment
    ///
    /// Examples: ' ' (open), 'x', '[xX]', '[^ ]' (anything but open).
    /// Defaults to `scan.status_filter` from the config file ('.').
    #[arg(short, long)]
    pub status: Option<String>,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Only show tasks with this priority (high, medium, none, low)
    #[arg(short, long)]
    pub priority: Option<Priority>,
}
