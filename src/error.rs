//! Error types for contactbook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ContactError
pub type Result<T> = std::result::Result<T, ContactError>;

/// Unified error type for contactbook operations
#[derive(Debug, Error)]
pub enum ContactError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Allocation failed: {0}")]
    Allocation(String),

    #[error("Contact {0} not found")]
    NotFound(u32),

    #[error("No contact ID available above {0}")]
    IdExhausted(u32),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Contact file corrupted: {0}")]
    Corruption(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for ContactError {
    fn from(err: bincode::Error) -> Self {
        ContactError::Serialization(err.to_string())
    }
}
