use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use addrbook::cli::{self, context::CliContext};
use addrbook::config::AppConfig;
use addrbook::model::BirthdayRule;
use addrbook::store::ContactStore;
use addrbook::{logging, migrate};

/// Personal address book with birthday reminders.
#[derive(Debug, Parser)]
#[command(name = "addrbook", version)]
struct Args {
    /// Contact file (.json, or .db/.sqlite for SQLite)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Configuration file (default: addrbook.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level or RUST_LOG-style filter, e.g. "info"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// How days until a birthday are counted: literal or next-occurrence
    #[arg(long, value_name = "RULE", value_parser = parse_birthday_rule)]
    birthday_rule: Option<BirthdayRule>,

    /// Append contacts from another contact file, then exit
    #[arg(long, value_name = "PATH")]
    import: Option<PathBuf>,
}

fn parse_birthday_rule(s: &str) -> Result<BirthdayRule, String> {
    BirthdayRule::try_from(s.to_string())
}

fn main() {
    let args = Args::parse();

    let mut config = match AppConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    config.apply_overrides(
        args.file.map(|p| p.to_string_lossy().into_owned()),
        args.log_level,
    );
    if let Some(rule) = args.birthday_rule {
        config.birthday_rule = rule;
    }

    logging::init(&config.log_level);
    tracing::debug!(
        data_file = %config.data_file.display(),
        birthday_rule = config.birthday_rule.to_config_str(),
        "configuration resolved"
    );

    let store = match ContactStore::open(&config.data_file) {
        Ok(s) => s.with_birthday_rule(config.birthday_rule),
        Err(e) => {
            eprintln!("Error loading {}: {}", config.data_file.display(), e);
            exit(1);
        }
    };

    let mut ctx = CliContext::new(store, config);

    if let Some(source) = args.import {
        println!("Importing from {}...", source.display());
        match migrate::import_contacts(&source, &mut ctx.store) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Imported: {}", stats.imported);
                println!("  Skipped (invalid): {}", stats.skipped);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                exit(1);
            }
        }
        return;
    }

    cli::run(&mut ctx);
}
