//! Configuration for contactbook
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

/// Main configuration for a contact book
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Binary file holding the persisted contacts.
    /// Rewritten in full after every mutation.
    pub data_file: PathBuf,

    /// Directory CSV exports are written into
    pub export_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Stress Test Configuration
    // -------------------------------------------------------------------------
    /// Upper bound for a single `generate_test_records` call
    pub max_generated: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/contacts.bin"),
            export_dir: PathBuf::from("data"),
            max_generated: 100_000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve a user-supplied export name to a path under `export_dir`.
    ///
    /// `".csv"` is appended when the name does not already contain it.
    pub fn export_path(&self, name: &str) -> PathBuf {
        if name.contains(".csv") {
            self.export_dir.join(name)
        } else {
            self.export_dir.join(format!("{}.csv", name))
        }
    }

    /// Directory that holds the data file (if it has one)
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the binary data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the directory for CSV exports
    pub fn export_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.export_dir = path.into();
        self
    }

    /// Set the maximum number of records a stress run may generate
    pub fn max_generated(mut self, count: usize) -> Self {
        self.config.max_generated = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
