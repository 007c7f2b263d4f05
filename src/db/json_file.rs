use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::BookResult;
use crate::model::Contact;

/// Reads a JSON array of contacts. Returns None when the file does not exist.
/// An empty (or whitespace-only) file is an empty list.
pub fn read(path: &Path) -> BookResult<Option<Vec<Contact>>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if data.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }

    Ok(Some(serde_json::from_str(&data)?))
}

/// Writes `contacts` as a pretty-printed JSON array, replacing `path`.
pub fn write(path: &Path, contacts: &[Contact]) -> BookResult<()> {
    let json = serde_json::to_string_pretty(contacts)?;
    fs::write(path, json)?;
    Ok(())
}
