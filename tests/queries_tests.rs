use chrono::NaiveDate;
use addrbook::model::*;
use addrbook::queries::*;

fn contact(name: &str, phone: &str, birthday: &str) -> Contact {
    Contact::create(name.into(), phone.into(), birthday.into(), "x@example.com".into())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================================================
// SEARCH
// ==========================================================================

#[test]
fn search_name_is_case_insensitive() {
    let contacts = vec![
        contact("Anna", "+380501111111", "01.01.1990"),
        contact("Ivan", "+380502222222", "02.02.1991"),
    ];
    let results = contact_queries::search(&contacts, "ANN");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Anna");
}

#[test]
fn search_phone_is_exact_substring() {
    let contacts = vec![
        contact("Anna", "+380501111111", "01.01.1990"),
        contact("Ivan", "+380672222222", "02.02.1991"),
    ];
    let results = contact_queries::search(&contacts, "+38067");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Ivan");

    assert!(contact_queries::search(&contacts, "380 67").is_empty());
}

#[test]
fn search_matches_either_field() {
    let contacts = vec![
        contact("Contact 0501", "+380671111111", "01.01.1990"),
        contact("Ivan", "+380501222222", "02.02.1991"),
    ];
    assert_eq!(contact_queries::search(&contacts, "0501").len(), 2);
}

#[test]
fn search_with_positions_reports_stored_positions() {
    let contacts = vec![
        contact("Anna", "+380501111111", "01.01.1990"),
        contact("Ivan", "+380502222222", "02.02.1991"),
        contact("Joanna", "+380503333333", "03.03.1992"),
    ];
    let positions: Vec<usize> = contact_queries::search_with_positions(&contacts, "anna")
        .into_iter()
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions, vec![0, 2]);
}

#[test]
fn empty_term_matches_everything() {
    let contacts = vec![
        contact("Anna", "+380501111111", "01.01.1990"),
        contact("Ivan", "+380502222222", "02.02.1991"),
    ];
    assert_eq!(contact_queries::search(&contacts, "").len(), 2);
}

// ==========================================================================
// BIRTHDAYS
// ==========================================================================

#[test]
fn literal_rule_reports_days_in_stored_year() {
    let contacts = vec![
        contact("Anna", "+380501111111", "15.06.2024"),
        contact("Ivan", "+380502222222", "15.06.2020"),
    ];
    let upcoming = birthday_queries::upcoming(&contacts, 30, date(2024, 6, 1), BirthdayRule::Literal);
    assert_eq!(
        upcoming,
        vec![UpcomingBirthday {
            contact: contacts[0].clone(),
            days_until: 14,
        }]
    );
}

#[test]
fn literal_rule_includes_future_years_inside_window() {
    let contacts = vec![contact("Baby", "+380501111111", "10.01.2025")];
    let upcoming =
        birthday_queries::upcoming(&contacts, 60, date(2024, 12, 31), BirthdayRule::Literal);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].days_until, 10);
}

#[test]
fn next_occurrence_rule_reanchors_to_current_year() {
    let contacts = vec![
        contact("Anna", "+380501111111", "15.06.2024"),
        contact("Ivan", "+380502222222", "15.06.2020"),
    ];
    let upcoming =
        birthday_queries::upcoming(&contacts, 30, date(2024, 6, 1), BirthdayRule::NextOccurrence);
    let days: Vec<i64> = upcoming.iter().map(|u| u.days_until).collect();
    assert_eq!(days, vec![14, 14]);
}

#[test]
fn next_occurrence_rule_wraps_across_new_year() {
    let contacts = vec![contact("Anna", "+380501111111", "03.01.1990")];
    let upcoming =
        birthday_queries::upcoming(&contacts, 7, date(2024, 12, 30), BirthdayRule::NextOccurrence);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].days_until, 4);
}

#[test]
fn unparseable_and_blank_birthdays_are_skipped() {
    let contacts = vec![
        contact("Blank", "+380501111111", ""),
        contact("Garbage", "+380502222222", "someday"),
        contact("Anna", "+380503333333", "02.06.2024"),
    ];
    let upcoming = birthday_queries::upcoming(&contacts, 30, date(2024, 6, 1), BirthdayRule::Literal);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].contact.name, "Anna");
}

#[test]
fn negative_window_matches_nothing() {
    let contacts = vec![contact("Anna", "+380501111111", "01.06.2024")];
    let upcoming = birthday_queries::upcoming(&contacts, -1, date(2024, 6, 1), BirthdayRule::Literal);
    assert!(upcoming.is_empty());
}

#[test]
fn days_until_dispatches_on_rule() {
    let birthday = date(2020, 6, 15);
    let today = date(2024, 6, 1);
    assert_eq!(
        birthday_queries::days_until(birthday, today, BirthdayRule::Literal),
        birthday_queries::literal_days_until(birthday, today)
    );
    assert_eq!(
        birthday_queries::days_until(birthday, today, BirthdayRule::NextOccurrence),
        14
    );
}
