//! Command-line interface for taskmark.

pub mod args;
pub mod commands;
