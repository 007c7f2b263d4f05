use rusqlite::Connection;

use crate::error::BookResult;

/// Initialize the database schema. Creates the contacts table if it doesn't exist.
///
/// `position` is the 0-based display order; the table is rewritten wholesale
/// on every save so positions are always dense.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            position INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            birthday TEXT NOT NULL,
            email TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Whether the contacts table exists. A zero-byte file or a database created
/// elsewhere has none.
pub fn has_contacts_table(conn: &Connection) -> BookResult<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'contacts'",
        [],
        |row| row.get(0),
    )?;
    Ok(n > 0)
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
