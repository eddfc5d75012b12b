//! Store Module
//!
//! In-memory collection of contacts.
//!
//! ## Responsibilities
//! - Own the ordered list of live contacts
//! - Grow and shrink capacity on a doubling/halving policy
//! - Assign IDs as `max(live ids) + 1`
//! - CRUD and linear substring search
//! - Memory accounting for diagnostics
//!
//! ## Data Structure Choice
//! A `Vec<Contact>` plus a tracked logical capacity:
//! - Deletion shifts later records left, so `[0, count)` never has gaps
//! - Capacity changes are explicit and observable through `capacity()`
//! - Lookup is a linear scan; stores are expected to stay small

mod contact;
mod list;
mod memory;

pub use contact::{truncate_field, Contact};
pub use list::ContactStore;
pub use memory::MemoryReport;

/// Capacity of a freshly created store, and the floor for shrinking
pub const INITIAL_CAPACITY: usize = 10;

/// Width of the name field in bytes, terminator included
pub const NAME_WIDTH: usize = 100;

/// Width of the phone field in bytes, terminator included
pub const PHONE_WIDTH: usize = 20;

/// Width of the email field in bytes, terminator included
pub const EMAIL_WIDTH: usize = 100;

/// Size of one fixed-layout record: id (4) + name + phone + email + active (4)
pub const RECORD_SIZE: usize = 4 + NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + 4;
