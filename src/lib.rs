//! taskmark - checklist task extraction
//!
//! This crate finds checklist lines such as `- [ ] pay rent ⏫ 📅 2024-02-01`
//! in plain-text notes and turns each into a structured [`task::Task`].
//!
//! ```
//! use taskmark::task::{annotate, parse_document, Priority};
//!
//! let task = annotate("- [ ] pay rent ⏫ 📅 2024-02-01").unwrap();
//! assert_eq!(task.description, "pay rent");
//! assert_eq!(task.priority, Priority::High);
//!
//! let open = parse_document("- [ ] a\n- [x] b\n", " ").unwrap();
//! assert_eq!(open.len(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskmarkError;
pub use task::{annotate, parse_document, scan, Task};
