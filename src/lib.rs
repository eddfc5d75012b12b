//! # contactbook
//!
//! A small contact manager with:
//! - A compacting, capacity-managed in-memory store
//! - IDs assigned as one past the largest live ID
//! - A fixed-layout binary file (count prefix + 228-byte records)
//! - CSV export
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         CLI                                  │
//! │                  (one command per run)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ContactBook                              │
//! │              (save after every mutation)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Store     │          │   Storage   │
//!   │ (Vec, grow/ │          │ (bin + CSV) │
//!   │   shrink)   │          └─────────────┘
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod storage;
pub mod book;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ContactError, Result};
pub use config::Config;
pub use book::ContactBook;
pub use store::{Contact, ContactStore, MemoryReport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of contactbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
