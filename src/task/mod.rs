//! Checklist task parsing.
//!
//! This module extracts tasks from lines like:
//! - "- [ ] buy milk"
//! - "  - [x] file taxes ⏫ 📅 2024-04-15 ✅ 2024-04-10"
//! - "* [ ] water plants 🔁 every week ^plants"

mod annotate;
pub mod markers;
mod scan;
mod types;

pub use annotate::annotate;
pub use scan::{
    parse_document, scan, scan_with_filter, LocatedTask, ScannedLine, Scanner, ANY_STATUS,
};
pub use types::{DateKind, Priority, Task};
