//! Contact record and bounded text fields

use std::fmt;

use super::{EMAIL_WIDTH, NAME_WIDTH, PHONE_WIDTH};

/// A single contact
///
/// Text fields are held already truncated to their on-disk widths, so a
/// record always encodes to a fixed-size block without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: u32,
    name: String,
    phone: String,
    email: String,
    /// Legacy soft-delete flag, always true for records held by a store
    active: bool,
}

impl Contact {
    /// Build a live contact, truncating each field to its width
    pub(crate) fn new(id: u32, name: &str, phone: &str, email: &str) -> Self {
        Self {
            id,
            name: truncate_field(name, NAME_WIDTH),
            phone: truncate_field(phone, PHONE_WIDTH),
            email: truncate_field(email, EMAIL_WIDTH),
            active: true,
        }
    }

    /// Rebuild a contact decoded from disk, keeping its stored flag
    pub(crate) fn from_parts(id: u32, name: &str, phone: &str, email: &str, active: bool) -> Self {
        Self {
            active,
            ..Self::new(id, name, phone, email)
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = truncate_field(name, NAME_WIDTH);
    }

    pub(crate) fn set_phone(&mut self, phone: &str) {
        self.phone = truncate_field(phone, PHONE_WIDTH);
    }

    pub(crate) fn set_email(&mut self, email: &str) {
        self.email = truncate_field(email, EMAIL_WIDTH);
    }

    /// True if `term` occurs in the name, phone or email (case-sensitive)
    pub fn matches(&self, term: &str) -> bool {
        self.name.contains(term) || self.phone.contains(term) || self.email.contains(term)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {:<30} {:<20} {:<30}",
            self.id, self.name, self.phone, self.email
        )
    }
}

/// Truncate `text` so it fits a fixed field of `width` bytes, terminator included.
///
/// Content stops at the first NUL and never exceeds `width - 1` bytes. The
/// cut backs off to a char boundary, so multi-byte characters are dropped
/// whole rather than split.
pub fn truncate_field(text: &str, width: usize) -> String {
    let text = match text.find('\0') {
        Some(nul) => &text[..nul],
        None => text,
    };

    let limit = width.saturating_sub(1);
    if text.len() <= limit {
        return text.to_string();
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
