use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation;

/// One stored person record.
///
/// Fields are kept as the user typed them. Phone and email are expected to
/// have passed validation before a contact enters the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub birthday: String,
    pub email: String,
}

impl Contact {
    pub fn create(name: String, phone: String, birthday: String, email: String) -> Self {
        Self {
            name,
            phone,
            birthday,
            email,
        }
    }

    /// The birthday as a date in its stored year, if it parses.
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        validation::parse_birthday(&self.birthday)
    }

    /// Case-insensitive substring match on the name, or exact substring
    /// match on the phone.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}
