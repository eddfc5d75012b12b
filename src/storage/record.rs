//! Record block codec
//!
//! One contact ⇄ one 228-byte block. Encoding goes through serde + bincode
//! with fixed-width little-endian integers; text fields are fixed byte
//! arrays serialized as tuples, so bincode writes them without a length.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, Result};
use crate::store::{Contact, EMAIL_WIDTH, NAME_WIDTH, PHONE_WIDTH, RECORD_SIZE};

/// On-disk flag value for a live record
const ACTIVE: i32 = 1;

/// NUL-padded fixed-width text field
#[derive(Debug, Clone, PartialEq, Eq)]
struct FixedBytes<const N: usize>([u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Copy `text` in, always leaving at least one trailing NUL
    fn from_text(text: &str) -> Self {
        let mut bytes = [0u8; N];
        let len = text.len().min(N.saturating_sub(1));
        bytes[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self(bytes)
    }

    /// Text up to the first NUL; invalid UTF-8 is replaced, not rejected
    fn to_text(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for byte in &self.0 {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FixedBytesVisitor<const M: usize>;

        impl<'de, const M: usize> Visitor<'de> for FixedBytesVisitor<M> {
            type Value = FixedBytes<M>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} bytes", M)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
                let mut bytes = [0u8; M];
                for (i, slot) in bytes.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                }
                Ok(FixedBytes(bytes))
            }
        }

        deserializer.deserialize_tuple(N, FixedBytesVisitor::<N>)
    }
}

/// Field-for-field image of a record block
#[derive(Debug, Serialize, Deserialize)]
struct DiskRecord {
    id: i32,
    name: FixedBytes<NAME_WIDTH>,
    phone: FixedBytes<PHONE_WIDTH>,
    email: FixedBytes<EMAIL_WIDTH>,
    active: i32,
}

impl From<&Contact> for DiskRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            // Store IDs never exceed i32::MAX
            id: contact.id() as i32,
            name: FixedBytes::from_text(contact.name()),
            phone: FixedBytes::from_text(contact.phone()),
            email: FixedBytes::from_text(contact.email()),
            active: if contact.is_active() { ACTIVE } else { 0 },
        }
    }
}

/// Encode a contact into exactly `RECORD_SIZE` bytes
pub fn encode_record(contact: &Contact) -> Result<Vec<u8>> {
    let bytes = bincode::serialize(&DiskRecord::from(contact))?;

    if bytes.len() != RECORD_SIZE {
        return Err(ContactError::Serialization(format!(
            "record block is {} bytes, expected {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    Ok(bytes)
}

/// Decode one record block
///
/// Fails with `Corruption` on a wrong-sized block or a non-positive ID.
pub fn decode_record(bytes: &[u8]) -> Result<Contact> {
    if bytes.len() != RECORD_SIZE {
        return Err(ContactError::Corruption(format!(
            "record block is {} bytes, expected {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    let record: DiskRecord = bincode::deserialize(bytes)
        .map_err(|e| ContactError::Corruption(format!("undecodable record: {}", e)))?;

    if record.id <= 0 {
        return Err(ContactError::Corruption(format!(
            "invalid contact id {}",
            record.id
        )));
    }

    Ok(Contact::from_parts(
        record.id as u32,
        &record.name.to_text(),
        &record.phone.to_text(),
        &record.email.to_text(),
        record.active != 0,
    ))
}
