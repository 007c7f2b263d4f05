use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::model::{BirthdayRule, Contact, UpcomingBirthday};

/// Whole days from `today` to `birthday` taken in its stored year.
///
/// No re-anchoring happens: a birthday stored as `15.06.2020` is about four
/// years in the past when today is in 2024.
pub fn literal_days_until(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (birthday - today).num_days()
}

/// Whole days from `today` to the next anniversary of `birthday`, today
/// included. A 29 February birthday is celebrated on 28 February in
/// non-leap years.
pub fn next_occurrence_days_until(birthday: NaiveDate, today: NaiveDate) -> i64 {
    let this_year = anniversary_in(birthday, today.year());
    let next = if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    };
    (next - today).num_days()
}

pub fn days_until(birthday: NaiveDate, today: NaiveDate, rule: BirthdayRule) -> i64 {
    match rule {
        BirthdayRule::Literal => literal_days_until(birthday, today),
        BirthdayRule::NextOccurrence => next_occurrence_days_until(birthday, today),
    }
}

/// Contacts whose birthday is between 0 and `days` days away (inclusive),
/// in stored order. Birthdays that don't parse are skipped.
pub fn upcoming(
    contacts: &[Contact],
    days: i64,
    today: NaiveDate,
    rule: BirthdayRule,
) -> Vec<UpcomingBirthday> {
    let mut results = Vec::new();

    for (position, contact) in contacts.iter().enumerate() {
        if contact.birthday.trim().is_empty() {
            continue;
        }
        let birthday = match contact.birthday_date() {
            Some(d) => d,
            None => {
                warn!(position, "skipping contact with unparseable birthday");
                continue;
            }
        };

        let days_until = days_until(birthday, today, rule);
        if (0..=days).contains(&days_until) {
            results.push(UpcomingBirthday {
                contact: contact.clone(),
                days_until,
            });
        }
    }

    results
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}
