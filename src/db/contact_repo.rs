use rusqlite::{params, Connection, Row};

use crate::error::BookResult;
use crate::model::Contact;

/// Replaces every row with `contacts`, in order, inside one transaction.
pub fn replace_all(conn: &Connection, contacts: &[Contact]) -> BookResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM contacts", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO contacts (position, name, phone, birthday, email)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (position, contact) in contacts.iter().enumerate() {
            stmt.execute(params![
                position as i64,
                contact.name,
                contact.phone,
                contact.birthday,
                contact.email,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn find_all(conn: &Connection) -> BookResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT name, phone, birthday, email FROM contacts ORDER BY position",
    )?;

    let contacts = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        name: row.get(0)?,
        phone: row.get(1)?,
        birthday: row.get(2)?,
        email: row.get(3)?,
    })
}
