//! Storage Module
//!
//! Persistence for a ContactStore.
//!
//! ## Contact File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (4 bytes)                                        │
//! │   Count: i32 LE                                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ Record Block (228 bytes) × Count                        │
//! │   Id: i32 LE (4)                                        │
//! │   Name: NUL-padded bytes (100)                          │
//! │   Phone: NUL-padded bytes (20)                          │
//! │   Email: NUL-padded bytes (100)                         │
//! │   Active: i32 LE (4), 1 = active                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! No magic, version or checksum. The block is byte-identical to the C
//! struct `{ int id; char name[100]; char phone[20]; char email[100];
//! int active; }` on little-endian targets, which has no padding.
//!
//! ## Responsibilities
//! - Encode/decode fixed-size record blocks
//! - Save and load the whole store
//! - Export live contacts as CSV

mod csv;
mod file;
mod record;

pub use self::csv::{export_csv, CSV_HEADER};
pub use file::{load, save};
pub use record::{decode_record, encode_record};

/// Size of the count prefix in bytes
pub const HEADER_SIZE: u64 = 4;

/// Expected file size for a given record count
pub fn expected_file_size(count: u64) -> u64 {
    HEADER_SIZE + count * crate::store::RECORD_SIZE as u64
}
