use addrbook::db;
use addrbook::migrate::{self, ImportStats};
use addrbook::model::*;
use addrbook::store::ContactStore;
use tempfile::TempDir;

fn contact(name: &str, phone: &str, email: &str) -> Contact {
    Contact::create(name.into(), phone.into(), "01.01.1990".into(), email.into())
}

#[test]
fn import_appends_valid_contacts_after_existing_ones() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("other.db");
    db::save(
        &source,
        &[
            contact("Ivan", "+380502222222", "ivan@example.com"),
            contact("Olena", "+380673333333", "olena@example.com"),
        ],
    )
    .unwrap();

    let path = dir.path().join("book.json");
    let mut store = ContactStore::new(&path);
    store.add(contact("Anna", "+380501111111", "anna@example.com")).unwrap();

    let stats = migrate::import_contacts(&source, &mut store).unwrap();
    assert_eq!(stats, ImportStats { imported: 2, skipped: 0 });

    let reopened = ContactStore::open(&path).unwrap();
    let names: Vec<&str> = reopened.list_all().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Ivan", "Olena"]);
}

#[test]
fn import_skips_invalid_records() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("other.json");
    db::save(
        &source,
        &[
            contact("Ivan", "0502222222", "ivan@example.com"),
            contact("Olena", "+380673333333", "olena@example"),
            contact("Petro", "+380504444444", "petro@example.com"),
        ],
    )
    .unwrap();

    let mut store = ContactStore::new(dir.path().join("book.json"));
    let stats = migrate::import_contacts(&source, &mut store).unwrap();
    assert_eq!(stats, ImportStats { imported: 1, skipped: 2 });
    assert_eq!(store.get(0).unwrap().name, "Petro");
}

#[test]
fn import_missing_source_fails_without_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let mut store = ContactStore::new(&path);

    assert!(migrate::import_contacts(&dir.path().join("missing.json"), &mut store).is_err());
    assert!(store.is_empty());
    assert!(!path.exists());
}
