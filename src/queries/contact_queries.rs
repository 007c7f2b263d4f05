use crate::model::Contact;

/// Contacts matching `term` by name (case-insensitive) or phone (exact
/// substring), in stored order.
pub fn search<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| c.matches(term)).collect()
}

/// Same as [`search`] but paired with each contact's 0-based position.
pub fn search_with_positions<'a>(contacts: &'a [Contact], term: &str) -> Vec<(usize, &'a Contact)> {
    contacts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.matches(term))
        .collect()
}
