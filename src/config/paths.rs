//! Path resolution for taskmark configuration.
//!
//! Data lives in `~/.taskmark/` unless `TASKMARK_HOME` points elsewhere:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TaskmarkError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "TASKMARK_HOME";

/// Paths to taskmark configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskmark/`
    pub root: PathBuf,
    /// Config file: `~/.taskmark/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `TASKMARK_HOME`, falling back to the user's home.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TaskmarkError> {
        if let Some(root) = std::env::var_os(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            TaskmarkError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskmark")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskmarkError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskmarkError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
