use std::io::{self, Write};

use crate::config::AppConfig;
use crate::store::ContactStore;

pub struct CliContext {
    pub store: ContactStore,
    pub config: AppConfig,
}

impl CliContext {
    pub fn new(store: ContactStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Keep prompting until `accept` returns true. Returns None on EOF.
    pub fn prompt_until(
        &self,
        prompt: &str,
        retry_message: &str,
        accept: impl Fn(&str) -> bool,
    ) -> Option<String> {
        let mut value = self.prompt(prompt)?;
        while !accept(&value) {
            println!("{}", retry_message);
            value = self.prompt(prompt)?;
        }
        Some(value)
    }

    /// Read a 1-based contact number and turn it into a 0-based position.
    /// Prints a message and returns None for non-numbers and out-of-range values.
    pub fn prompt_index(&self, prompt: &str) -> Option<usize> {
        let input = self.prompt(prompt)?;
        let number = match input.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid input format!");
                return None;
            }
        };
        if number < 1 || number as usize > self.store.len() {
            println!("Invalid contact number.");
            return None;
        }
        Some(number as usize - 1)
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::BookError) {
        println!("Error: {}", e);
    }
}
