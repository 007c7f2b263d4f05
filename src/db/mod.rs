//! On-disk representation of the contact list.
//!
//! A contact file is either a JSON document or a SQLite database, chosen
//! from its extension. Both hold the whole ordered list; saving always
//! rewrites the file completely through a sibling temporary file that is
//! renamed into place.

pub mod schema;
pub mod contact_repo;
pub mod json_file;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::BookResult;
use crate::model::Contact;

/// Serialization format of a contact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Sqlite,
}

impl FileFormat {
    /// `.db`, `.sqlite` and `.sqlite3` are SQLite; everything else is JSON.
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("db") | Some("sqlite") | Some("sqlite3") => FileFormat::Sqlite,
            _ => FileFormat::Json,
        }
    }
}

/// Loads the contact list at `path`. Returns None when the file is missing.
pub fn load(path: &Path) -> BookResult<Option<Vec<Contact>>> {
    let format = FileFormat::for_path(path);
    let contacts = match format {
        FileFormat::Json => json_file::read(path)?,
        FileFormat::Sqlite => read_sqlite(path)?,
    };
    debug!(
        path = %path.display(),
        ?format,
        found = contacts.is_some(),
        "read contact file"
    );
    Ok(contacts)
}

/// Rewrites the file at `path` with `contacts`, creating parent directories.
pub fn save(path: &Path, contacts: &[Contact]) -> BookResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    if tmp.exists() {
        fs::remove_file(&tmp)?;
    }

    let format = FileFormat::for_path(path);
    let written = match format {
        FileFormat::Json => json_file::write(&tmp, contacts),
        FileFormat::Sqlite => write_sqlite(&tmp, contacts),
    };
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), ?format, count = contacts.len(), "wrote contact file");
    Ok(())
}

fn read_sqlite(path: &Path) -> BookResult<Option<Vec<Contact>>> {
    if !path.exists() {
        return Ok(None);
    }
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    if !schema::has_contacts_table(&conn)? {
        return Ok(Some(Vec::new()));
    }
    Ok(Some(contact_repo::find_all(&conn)?))
}

fn write_sqlite(path: &Path, contacts: &[Contact]) -> BookResult<()> {
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    contact_repo::replace_all(&conn, contacts)?;
    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "contacts".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_extensions_select_sqlite() {
        assert_eq!(FileFormat::for_path(Path::new("book.db")), FileFormat::Sqlite);
        assert_eq!(FileFormat::for_path(Path::new("book.SQLITE")), FileFormat::Sqlite);
        assert_eq!(FileFormat::for_path(Path::new("a/b.sqlite3")), FileFormat::Sqlite);
    }

    #[test]
    fn other_extensions_select_json() {
        assert_eq!(FileFormat::for_path(Path::new("book.json")), FileFormat::Json);
        assert_eq!(FileFormat::for_path(Path::new("address_book.pkl")), FileFormat::Json);
        assert_eq!(FileFormat::for_path(Path::new("book")), FileFormat::Json);
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("data/book.json")),
            PathBuf::from("data/book.json.tmp")
        );
    }
}
