use std::path::Path;

use tracing::{info, warn};

use crate::db;
use crate::error::{BookError, BookResult};
use crate::ops::contact_ops;
use crate::store::ContactStore;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// Appends every valid contact from the file at `source` (JSON or SQLite)
/// to `store`, in order, with a single write. Records that fail validation
/// are skipped and counted.
pub fn import_contacts(source: &Path, store: &mut ContactStore) -> BookResult<ImportStats> {
    let incoming = db::load(source)?.ok_or_else(|| {
        BookError::Other(format!("Import file not found: {}", source.display()))
    })?;

    let mut stats = ImportStats::default();
    let mut accepted = Vec::with_capacity(incoming.len());

    for (position, raw) in incoming.iter().enumerate() {
        match contact_ops::validated(&raw.name, &raw.phone, &raw.birthday, &raw.email) {
            Ok(contact) => accepted.push(contact),
            Err(e) => {
                warn!(position, error = %e, "skipping invalid contact during import");
                stats.skipped += 1;
            }
        }
    }

    if !accepted.is_empty() {
        stats.imported = store.append(accepted)?;
    }

    info!(
        source = %source.display(),
        imported = stats.imported,
        skipped = stats.skipped,
        "import finished"
    );
    Ok(stats)
}
