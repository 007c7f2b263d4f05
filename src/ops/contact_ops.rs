use crate::error::BookResult;
use crate::model::{Contact, Outcome};
use crate::store::ContactStore;
use crate::validation;

/// Builds a contact from raw input, trimming every field.
///
/// Name must be non-blank, phone and email must match their formats, and
/// birthday must parse as day.month.year.
pub fn validated(name: &str, phone: &str, birthday: &str, email: &str) -> BookResult<Contact> {
    Ok(Contact::create(
        validation::non_blank(name, "name")?,
        validation::phone(phone)?,
        validation::birthday(birthday)?,
        validation::email(email)?,
    ))
}

pub fn add_contact(
    store: &mut ContactStore,
    name: &str,
    phone: &str,
    birthday: &str,
    email: &str,
) -> BookResult<Contact> {
    let contact = validated(name, phone, birthday, email)?;
    store.add(contact.clone())?;
    Ok(contact)
}

/// Validates then overwrites the contact at `index`. Returns the new value.
pub fn edit_contact(
    store: &mut ContactStore,
    index: usize,
    name: &str,
    phone: &str,
    birthday: &str,
    email: &str,
) -> BookResult<Outcome<Contact>> {
    let contact = validated(name, phone, birthday, email)?;
    let outcome = store.replace(index, contact.clone())?;
    Ok(match outcome {
        Outcome::Applied(_) => Outcome::Applied(contact),
        Outcome::NotFound { index } => Outcome::NotFound { index },
    })
}

pub fn remove_contact(store: &mut ContactStore, index: usize) -> BookResult<Outcome<Contact>> {
    store.delete(index)
}
