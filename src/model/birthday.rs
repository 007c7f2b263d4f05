use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// How the distance from today to a birthday is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum BirthdayRule {
    /// Days from today to the birthday in its stored year. A birthday stored
    /// with a past year is always negative.
    #[default]
    Literal,
    /// Days from today to the next anniversary, on or after today.
    NextOccurrence,
}

impl BirthdayRule {
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Some(BirthdayRule::Literal),
            "next-occurrence" | "next_occurrence" | "next" => Some(BirthdayRule::NextOccurrence),
            _ => None,
        }
    }

    pub fn to_config_str(&self) -> &'static str {
        match self {
            BirthdayRule::Literal => "literal",
            BirthdayRule::NextOccurrence => "next-occurrence",
        }
    }
}

impl TryFrom<String> for BirthdayRule {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BirthdayRule::from_config_str(&s)
            .ok_or_else(|| format!("unknown birthday rule `{}`; expected literal|next-occurrence", s))
    }
}

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    pub days_until: i64,
}
