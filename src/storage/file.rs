//! Contact file save/load
//!
//! Whole-file, synchronous I/O. `save` rewrites the file in place; `load`
//! prefers an empty store over a partially-read one.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ContactError, Result};
use crate::store::{ContactStore, RECORD_SIZE};

use super::record::{decode_record, encode_record};
use super::expected_file_size;

/// Write every live contact to `path`, replacing any existing file
///
/// The write is not atomic: a failure part-way leaves a truncated file
/// behind, but is always reported as an error.
pub fn save(store: &ContactStore, path: &Path) -> Result<()> {
    let count = i32::try_from(store.len()).map_err(|_| {
        ContactError::Serialization(format!("{} contacts exceed the file's count field", store.len()))
    })?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);

    writer.write_all(&count.to_le_bytes())?;
    for contact in store.iter() {
        writer.write_all(&encode_record(contact)?)?;
    }

    writer.flush()?;

    let file = writer.into_inner().map_err(|e| ContactError::Io(e.into_error()))?;
    file.sync_all()?;

    debug!(path = %path.display(), count, "contacts saved");
    Ok(())
}

/// Rebuild a store from `path`
///
/// Missing, unreadable, truncated or corrupt files all yield an empty
/// store (with a warning for everything except a missing file). A file too
/// short for its declared count is rejected before anything is reserved, so
/// the only error is `Allocation`, when a count the file can actually hold
/// still cannot be reserved.
pub fn load(path: &Path) -> Result<ContactStore> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no contact file, starting empty");
            return Ok(ContactStore::new());
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open contact file, starting empty");
            return Ok(ContactStore::new());
        }
    };

    let file_size = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot stat contact file, starting empty");
            return Ok(ContactStore::new());
        }
    };

    let mut reader = BufReader::new(file);

    // Step 1: Count prefix
    let mut prefix = [0u8; 4];
    if let Err(e) = reader.read_exact(&mut prefix) {
        warn!(path = %path.display(), error = %e, "cannot read contact count, starting empty");
        return Ok(ContactStore::new());
    }

    let declared = i32::from_le_bytes(prefix);
    if declared < 0 {
        warn!(path = %path.display(), declared, "negative contact count, starting empty");
        return Ok(ContactStore::new());
    }
    if declared == 0 {
        return Ok(ContactStore::new());
    }
    let count = declared as usize;

    // Step 2: Size check (a longer file is only advisory)
    let expected = expected_file_size(count as u64);
    if file_size < expected {
        warn!(
            path = %path.display(),
            file_size,
            expected,
            "contact file shorter than its declared count, starting empty"
        );
        return Ok(ContactStore::new());
    }
    if file_size > expected {
        warn!(
            path = %path.display(),
            file_size,
            expected,
            "inconsistent contact file size"
        );
    }

    // Step 3: Read exactly `count` blocks
    let mut store = ContactStore::with_capacity(count)?;
    let mut block = [0u8; RECORD_SIZE];
    let mut seen = HashSet::with_capacity(count.min(u16::MAX as usize));
    let mut dropped = 0usize;

    for index in 0..count {
        if let Err(e) = reader.read_exact(&mut block) {
            warn!(
                path = %path.display(),
                expected = count,
                read = index,
                error = %e,
                "short read on contact file, starting empty"
            );
            return Ok(ContactStore::new());
        }

        let contact = match decode_record(&block) {
            Ok(contact) => contact,
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "corrupt contact record, starting empty");
                return Ok(ContactStore::new());
            }
        };

        if !seen.insert(contact.id()) {
            warn!(path = %path.display(), id = contact.id(), "duplicate contact id, starting empty");
            return Ok(ContactStore::new());
        }

        if !contact.is_active() {
            dropped += 1;
            continue;
        }

        store.restore(contact);
    }

    if dropped > 0 {
        warn!(path = %path.display(), dropped, "skipped soft-deleted contacts");
    }

    debug!(path = %path.display(), count = store.len(), capacity = store.capacity(), "contacts loaded");
    Ok(store)
}
