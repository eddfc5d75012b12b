//! ContactStore implementation
//!
//! Vec-backed contact list with explicit capacity management.

use std::mem;
use std::slice;

use tracing::debug;

use crate::error::{ContactError, Result};

use super::memory::MemoryReport;
use super::{Contact, INITIAL_CAPACITY, RECORD_SIZE};

/// Largest ID the fixed-layout file can hold (ids are stored as i32)
const MAX_ID: u32 = i32::MAX as u32;

/// Ordered, compacting collection of contacts
///
/// `capacity` is the logical allocation size. It only changes through
/// `grow` (doubling when full) and `maybe_shrink` (halving when mostly
/// empty), so it is independent of whatever slack `Vec` itself keeps.
#[derive(Debug)]
pub struct ContactStore {
    /// Live contacts in storage order, no gaps
    contacts: Vec<Contact>,

    /// Allocated slots, always >= contacts.len()
    capacity: usize,
}

impl ContactStore {
    /// Create an empty store with the initial capacity
    pub fn new() -> Self {
        Self {
            contacts: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Create an empty store with room for `capacity` contacts
    ///
    /// Fails with `Allocation` instead of aborting when the reservation
    /// cannot be satisfied (e.g. a corrupt count prefix asking for billions).
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity.max(INITIAL_CAPACITY);
        let mut contacts = Vec::new();
        contacts.try_reserve_exact(capacity).map_err(|e| {
            ContactError::Allocation(format!("cannot reserve {} contacts: {}", capacity, e))
        })?;

        Ok(Self { contacts, capacity })
    }

    /// Append a contact read back from disk
    ///
    /// The loader reserves `max(count, INITIAL_CAPACITY)` slots and restores
    /// at most `count` contacts, so capacity is never exceeded.
    pub(crate) fn restore(&mut self, contact: Contact) {
        debug_assert!(self.contacts.len() < self.capacity);
        self.contacts.push(contact);
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Add a contact and return its new ID
    ///
    /// The ID is one past the largest live ID, so deleting the highest-ID
    /// contact makes its ID available again.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<u32> {
        let id = self.next_id()?;

        if self.contacts.len() >= self.capacity {
            self.grow()?;
        }

        self.contacts.push(Contact::new(id, name, phone, email));
        Ok(id)
    }

    /// Find a contact by ID (linear scan)
    pub fn find_by_id(&self, id: u32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Update the given fields of a contact
    ///
    /// `None` or an empty string leaves that field as it is.
    pub fn edit(
        &mut self,
        id: u32,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<()> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(ContactError::NotFound(id))?;

        if let Some(name) = name.filter(|s| !s.is_empty()) {
            contact.set_name(name);
        }
        if let Some(phone) = phone.filter(|s| !s.is_empty()) {
            contact.set_phone(phone);
        }
        if let Some(email) = email.filter(|s| !s.is_empty()) {
            contact.set_email(email);
        }

        Ok(())
    }

    /// Remove a contact, shifting later contacts left
    ///
    /// Returns the removed contact. May halve capacity afterwards.
    pub fn delete(&mut self, id: u32) -> Result<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or(ContactError::NotFound(id))?;

        let removed = self.contacts.remove(index);
        self.maybe_shrink();

        Ok(removed)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Iterate over live contacts in storage order
    pub fn iter(&self) -> slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// All live contacts in storage order
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name, phone or email contains `term`
    ///
    /// An empty term matches nothing.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        if term.is_empty() {
            return Vec::new();
        }
        self.contacts.iter().filter(|c| c.matches(term)).collect()
    }

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Add `count` synthetic contacts for load testing
    ///
    /// Names, phones and emails are deterministic in the index. Returns the
    /// number of contacts added.
    pub fn generate_test_records(&mut self, count: usize) -> Result<usize> {
        for i in 0..count {
            let name = format!("Test Contact {}", i + 1);
            let phone = format!("11-9{:04}-{:04}", i / 10_000, i % 10_000);
            let email = format!("contact{}@test.com", i + 1);
            self.add(&name, &phone, &email)?;
        }

        debug!(count, total = self.len(), "generated test contacts");
        Ok(count)
    }

    /// Snapshot of memory usage derived from count and capacity
    pub fn memory_report(&self) -> MemoryReport {
        MemoryReport::new(
            self.len(),
            self.capacity,
            mem::size_of::<Self>(),
            RECORD_SIZE,
        )
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// One past the largest live ID, or 1 for an empty store
    fn next_id(&self) -> Result<u32> {
        let max_id = self.contacts.iter().map(Contact::id).max().unwrap_or(0);
        if max_id >= MAX_ID {
            return Err(ContactError::IdExhausted(max_id));
        }
        Ok(max_id + 1)
    }

    /// Double the capacity, leaving the store untouched on failure
    fn grow(&mut self) -> Result<()> {
        let new_capacity = self.capacity.max(1).checked_mul(2).ok_or_else(|| {
            ContactError::Allocation(format!("capacity {} cannot double", self.capacity))
        })?;

        let additional = new_capacity - self.contacts.len();
        self.contacts.try_reserve_exact(additional).map_err(|e| {
            ContactError::Allocation(format!("cannot grow to {} contacts: {}", new_capacity, e))
        })?;

        debug!(from = self.capacity, to = new_capacity, "store grown");
        self.capacity = new_capacity;
        Ok(())
    }

    /// Halve the capacity once the store is less than half full
    ///
    /// Never shrinks at or below twice the initial capacity, nor when empty.
    fn maybe_shrink(&mut self) {
        let count = self.contacts.len();
        if count == 0 || self.capacity <= INITIAL_CAPACITY * 2 || count >= self.capacity / 2 {
            return;
        }

        let new_capacity = self.capacity / 2;
        self.contacts.shrink_to(new_capacity);

        debug!(from = self.capacity, to = new_capacity, "store shrunk");
        self.capacity = new_capacity;
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
