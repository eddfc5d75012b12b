//! ContactBook Module
//!
//! Coordinates the in-memory store with its backing file.
//!
//! ## Responsibilities
//! - Load the store from the configured data file on open
//! - Persist after every mutation
//! - Resolve CSV export paths
//! - Run timed stress generations

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ContactError, Result};
use crate::storage;
use crate::store::{Contact, ContactStore, MemoryReport};

/// A contact store bound to a data file
///
/// Every mutating call saves the whole store before returning. When the
/// save fails the in-memory change is kept and the I/O error is returned,
/// so the caller can retry with `save()`.
pub struct ContactBook {
    /// Book configuration
    config: Config,

    /// Live contacts
    store: ContactStore,
}

/// Outcome of a CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Resolved output file
    pub path: PathBuf,
    /// Rows written, header excluded
    pub rows: usize,
}

/// Outcome of a stress generation run
#[derive(Debug, Clone, Copy)]
pub struct StressReport {
    /// Contacts generated by this run
    pub generated: usize,
    /// Contacts in the book afterwards
    pub total: usize,
    pub generate_time: Duration,
    pub save_time: Duration,
}

impl ContactBook {
    /// Open a book, loading whatever the data file holds
    ///
    /// On open:
    /// 1. Create the data file's directory if needed
    /// 2. Load the store (missing or damaged files give an empty store)
    pub fn open(config: Config) -> Result<Self> {
        if let Some(dir) = config.data_dir() {
            fs::create_dir_all(dir)?;
        }

        let store = storage::load(&config.data_file)?;
        debug!(
            path = %config.data_file.display(),
            count = store.len(),
            "contact book opened"
        );

        Ok(Self { config, store })
    }

    /// Open with a data file path (convenience method)
    ///
    /// Uses default config with the specified data file; exports go next to it.
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_file = path.to_path_buf();
        config.export_dir = config
            .data_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::open(config)
    }

    // =========================================================================
    // Mutations (persisted)
    // =========================================================================

    /// Add a contact and persist; returns its ID
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<u32> {
        let id = self.store.add(name, phone, email)?;
        self.persist()?;
        Ok(id)
    }

    /// Edit a contact and persist
    pub fn edit(
        &mut self,
        id: u32,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<()> {
        self.store.edit(id, name, phone, email)?;
        self.persist()
    }

    /// Delete a contact and persist; returns the removed contact
    pub fn delete(&mut self, id: u32) -> Result<Contact> {
        let removed = self.store.delete(id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Generate `count` test contacts, then persist, timing both steps
    ///
    /// `count` must be between 1 and `config.max_generated`.
    pub fn generate_test_records(&mut self, count: usize) -> Result<StressReport> {
        if count == 0 || count > self.config.max_generated {
            return Err(ContactError::Config(format!(
                "stress count must be between 1 and {}, got {}",
                self.config.max_generated, count
            )));
        }

        let started = Instant::now();
        let generated = self.store.generate_test_records(count)?;
        let generate_time = started.elapsed();

        let started = Instant::now();
        self.persist()?;
        let save_time = started.elapsed();

        Ok(StressReport {
            generated,
            total: self.store.len(),
            generate_time,
            save_time,
        })
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save the store to the data file
    pub fn save(&self) -> Result<()> {
        storage::save(&self.store, &self.config.data_file)
    }

    /// Discard the in-memory store and load the data file again
    pub fn reload(&mut self) -> Result<()> {
        self.store = storage::load(&self.config.data_file)?;
        Ok(())
    }

    /// Export live contacts to `name` under the export directory
    ///
    /// `".csv"` is appended when missing; the directory is created on demand.
    pub fn export_csv(&self, name: &str) -> Result<ExportReport> {
        let path = self.config.export_path(name);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let rows = storage::export_csv(&self.store, &path)?;
        Ok(ExportReport { path, rows })
    }

    fn persist(&self) -> Result<()> {
        self.save().map_err(|e| {
            warn!(path = %self.config.data_file.display(), error = %e, "failed to save contacts");
            e
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn find_by_id(&self, id: u32) -> Option<&Contact> {
        self.store.find_by_id(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.store.iter()
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        self.store.search(term)
    }

    pub fn memory_report(&self) -> MemoryReport {
        self.store.memory_report()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
