//! Configuration management for taskmark.
//!
//! This module handles loading and saving configuration from `~/.taskmark/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ScanConfig};
