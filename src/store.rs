//! The contact store: an ordered, persisted list of contacts.
//!
//! Position in the list is the contact's identity. The driver shows it
//! 1-based; every method here takes the 0-based position. Deleting a contact
//! shifts every later contact down by one.
//!
//! Every mutation rewrites the backing file before returning. If the write
//! fails the in-memory list is rolled back, so memory and disk never diverge.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::db;
use crate::error::BookResult;
use crate::model::{BirthdayRule, Contact, Outcome, UpcomingBirthday};
use crate::queries::{birthday_queries, contact_queries};

#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    birthday_rule: BirthdayRule,
}

impl ContactStore {
    /// An empty store backed by `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contacts: Vec::new(),
            birthday_rule: BirthdayRule::default(),
        }
    }

    /// An empty store backed by `path`, immediately loaded from it.
    /// A missing file leaves the store empty.
    pub fn open(path: impl Into<PathBuf>) -> BookResult<Self> {
        let mut store = Self::new(path);
        let path = store.path.clone();
        store.load_from_file(&path)?;
        Ok(store)
    }

    pub fn with_birthday_rule(mut self, rule: BirthdayRule) -> Self {
        self.birthday_rule = rule;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn birthday_rule(&self) -> BirthdayRule {
        self.birthday_rule
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Appends `contact` and persists.
    ///
    /// The caller is responsible for validating the fields first (see
    /// [`crate::ops::contact_ops::add_contact`] for the checked variant).
    pub fn add(&mut self, contact: Contact) -> BookResult<()> {
        self.contacts.push(contact);
        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }
        info!(count = self.contacts.len(), "contact added");
        Ok(())
    }

    /// Appends several contacts with a single write.
    pub fn append(&mut self, contacts: Vec<Contact>) -> BookResult<usize> {
        let before = self.contacts.len();
        let added = contacts.len();
        self.contacts.extend(contacts);
        if let Err(e) = self.persist() {
            self.contacts.truncate(before);
            return Err(e);
        }
        info!(added, count = self.contacts.len(), "contacts appended");
        Ok(added)
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        contact_queries::search(&self.contacts, term)
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Overwrites all four fields of the contact at `index` and persists.
    /// Same precondition as [`ContactStore::add`].
    pub fn edit(
        &mut self,
        index: usize,
        name: &str,
        phone: &str,
        birthday: &str,
        email: &str,
    ) -> BookResult<Outcome<()>> {
        let replacement = Contact::create(
            name.to_string(),
            phone.to_string(),
            birthday.to_string(),
            email.to_string(),
        );
        self.replace(index, replacement).map(|o| match o {
            Outcome::Applied(_) => Outcome::Applied(()),
            Outcome::NotFound { index } => Outcome::NotFound { index },
        })
    }

    /// Replaces the contact at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, contact: Contact) -> BookResult<Outcome<Contact>> {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "edit index out of range");
            return Ok(Outcome::NotFound { index });
        }

        let previous = std::mem::replace(&mut self.contacts[index], contact);
        if let Err(e) = self.persist() {
            self.contacts[index] = previous;
            return Err(e);
        }
        info!(index, "contact edited");
        Ok(Outcome::Applied(previous))
    }

    /// Removes the contact at `index`, persists, and hands it back so the
    /// caller can confirm by name.
    pub fn delete(&mut self, index: usize) -> BookResult<Outcome<Contact>> {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "delete index out of range");
            return Ok(Outcome::NotFound { index });
        }

        let removed = self.contacts.remove(index);
        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }
        info!(index, count = self.contacts.len(), "contact deleted");
        Ok(Outcome::Applied(removed))
    }

    /// Birthdays within `days` days of today, using the store's birthday rule.
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_as_of(days, Local::now().date_naive())
    }

    pub fn upcoming_birthdays_as_of(&self, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming(&self.contacts, days, today, self.birthday_rule)
    }

    /// Writes the whole list to `path`, replacing whatever is there.
    pub fn save_to_file(&self, path: &Path) -> BookResult<()> {
        db::save(path, &self.contacts)
    }

    /// Replaces the in-memory list with the contents of `path`.
    ///
    /// A missing file is not an error and leaves the list as it was. Any
    /// other failure is returned and the list is likewise left untouched.
    pub fn load_from_file(&mut self, path: &Path) -> BookResult<()> {
        match db::load(path)? {
            Some(contacts) => {
                info!(path = %path.display(), count = contacts.len(), "contacts loaded");
                self.contacts = contacts;
            }
            None => {
                info!(path = %path.display(), "no contact file yet, starting empty");
            }
        }
        Ok(())
    }

    fn persist(&self) -> BookResult<()> {
        self.save_to_file(&self.path)
    }
}
