pub mod context;
pub mod contact_commands;

use tracing::info;

use context::CliContext;

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    List,
    Edit,
    Delete,
    Birthdays,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Edit),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Birthdays),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the interactive menu until the user exits or stdin closes.
pub fn run(ctx: &mut CliContext) {
    println!("Address Book");
    println!("Contacts are stored in {}", ctx.store.path().display());
    println!();

    loop {
        print_menu();
        let input = match ctx.read_line("Choose an action: ") {
            Some(s) => s,
            None => break,
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Add) => contact_commands::add(ctx),
            Some(MenuChoice::Search) => contact_commands::search(ctx),
            Some(MenuChoice::List) => contact_commands::list(ctx),
            Some(MenuChoice::Edit) => contact_commands::edit(ctx),
            Some(MenuChoice::Delete) => contact_commands::delete(ctx),
            Some(MenuChoice::Birthdays) => contact_commands::birthdays(ctx),
            Some(MenuChoice::Exit) => break,
            None => println!("Unknown choice: {}. Enter a number from 1 to 7.", input.trim()),
        }
        println!();
    }

    info!(count = ctx.store.len(), "session ended");
}

fn print_menu() {
    println!("1. Add contact");
    println!("2. Search contacts");
    println!("3. List all contacts");
    println!("4. Edit contact");
    println!("5. Delete contact");
    println!("6. Check upcoming birthdays");
    println!("7. Exit");
}
