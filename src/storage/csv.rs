//! CSV export
//!
//! Fields are wrapped in double quotes verbatim. Embedded quotes and commas
//! are not escaped, so a field containing `"` or `,` yields a row other
//! CSV readers will split differently.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ContactError, Result};
use crate::store::{Contact, ContactStore};

/// Header row written before any contact
pub const CSV_HEADER: &str = "ID,Name,Phone,Email,Status";

/// Write all live contacts to `path` as CSV, replacing any existing file
///
/// Returns the number of rows written (header excluded).
pub fn export_csv(store: &ContactStore, path: &Path) -> Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", CSV_HEADER)?;

    let mut rows = 0;
    for contact in store.iter() {
        write_row(&mut writer, contact)?;
        rows += 1;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| ContactError::Io(e.into_error()))?;

    debug!(path = %path.display(), rows, "contacts exported");
    Ok(rows)
}

fn write_row<W: Write>(writer: &mut W, contact: &Contact) -> Result<()> {
    writeln!(
        writer,
        "{},\"{}\",\"{}\",\"{}\",Active",
        contact.id(),
        contact.name(),
        contact.phone(),
        contact.email()
    )?;
    Ok(())
}
