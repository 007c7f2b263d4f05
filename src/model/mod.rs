pub mod contact;
pub mod outcome;
pub mod birthday;

// Re-exports for convenience
pub use contact::Contact;
pub use outcome::Outcome;
pub use birthday::{BirthdayRule, UpcomingBirthday};
