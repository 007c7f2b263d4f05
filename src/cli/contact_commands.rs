use crate::cli::context::CliContext;
use crate::model::*;
use crate::ops::contact_ops;
use crate::queries::contact_queries;
use crate::validation;

const PHONE_PROMPT: &str = "Phone (+380XXXXXXXXX): ";
const PHONE_RETRY: &str = "Invalid phone format. Please try again (+380XXXXXXXXX).";
const BIRTHDAY_PROMPT: &str = "Birthday (day.month.year): ";
const BIRTHDAY_RETRY: &str = "Invalid birthday. Please use day.month.year, e.g. 25.12.1990.";
const EMAIL_PROMPT: &str = "Email: ";
const EMAIL_RETRY: &str = "Invalid email format. Please try again.";

pub fn format_contact(contact: &Contact) -> String {
    format!(
        "Name: {}, Phone: {}, Birthday: {}, Email: {}",
        contact.name, contact.phone, contact.birthday, contact.email
    )
}

/// Prompts for all four fields, re-prompting on invalid ones.
/// Returns None on EOF.
fn prompt_fields(ctx: &CliContext, name_prompt: &str) -> Option<(String, String, String, String)> {
    let name = ctx.prompt_until(name_prompt, "Name cannot be empty.", |s| !s.is_empty())?;
    let phone = ctx.prompt_until(PHONE_PROMPT, PHONE_RETRY, validation::is_valid_phone)?;
    let birthday = ctx.prompt_until(BIRTHDAY_PROMPT, BIRTHDAY_RETRY, |s| {
        validation::parse_birthday(s).is_some()
    })?;
    let email = ctx.prompt_until(EMAIL_PROMPT, EMAIL_RETRY, validation::is_valid_email)?;
    Some((name, phone, birthday, email))
}

pub fn add(ctx: &mut CliContext) {
    let (name, phone, birthday, email) = match prompt_fields(ctx, "Contact name: ") {
        Some(fields) => fields,
        None => return,
    };

    match contact_ops::add_contact(&mut ctx.store, &name, &phone, &birthday, &email) {
        Ok(_) => println!("Contact added!"),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn search(ctx: &CliContext) {
    let term = match ctx.read_line("Search for: ") {
        Some(s) => s,
        None => return,
    };

    let results = contact_queries::search_with_positions(ctx.store.list_all(), &term);
    if results.is_empty() {
        println!("No contacts found.");
        return;
    }

    println!("Found contacts:");
    for (position, contact) in results {
        println!("{}. {}", position + 1, format_contact(contact));
    }
}

pub fn list(ctx: &CliContext) {
    if ctx.store.is_empty() {
        println!("The address book is empty.");
        return;
    }

    println!("Contacts ({}):", ctx.store.len());
    for (position, contact) in ctx.store.list_all().iter().enumerate() {
        println!("{}. {}", position + 1, format_contact(contact));
    }
}

pub fn edit(ctx: &mut CliContext) {
    let index = match ctx.prompt_index("Number of the contact to edit: ") {
        Some(i) => i,
        None => return,
    };

    if let Some(current) = ctx.store.get(index) {
        println!("Editing {}", format_contact(current));
    }

    let (name, phone, birthday, email) = match prompt_fields(ctx, "New name: ") {
        Some(fields) => fields,
        None => return,
    };

    match contact_ops::edit_contact(&mut ctx.store, index, &name, &phone, &birthday, &email) {
        Ok(Outcome::Applied(_)) => println!("Contact updated!"),
        Ok(Outcome::NotFound { .. }) => println!("Invalid contact number."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CliContext) {
    let index = match ctx.prompt_index("Number of the contact to delete: ") {
        Some(i) => i,
        None => return,
    };

    match contact_ops::remove_contact(&mut ctx.store, index) {
        Ok(Outcome::Applied(removed)) => println!("Contact {} deleted!", removed.name),
        Ok(Outcome::NotFound { .. }) => println!("Invalid contact number."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn birthdays(ctx: &CliContext) {
    let default_days = ctx.config.default_window_days;
    let input = match ctx.prompt(&format!(
        "How many days ahead should be checked? [{}]: ",
        default_days
    )) {
        Some(s) => s,
        None => return,
    };

    let days = if input.is_empty() {
        default_days
    } else {
        match input.parse::<i64>() {
            Ok(d) => d,
            Err(_) => {
                println!("Invalid input format!");
                return;
            }
        }
    };

    let upcoming = ctx.store.upcoming_birthdays(days);
    if upcoming.is_empty() {
        println!("No upcoming birthdays.");
        return;
    }

    println!("Birthdays within the next {} days:", days);
    for entry in &upcoming {
        println!(
            "Name: {}, Birthday: {}, Days until birthday: {}",
            entry.contact.name, entry.contact.birthday, entry.days_until
        );
    }
}
