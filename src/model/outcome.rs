/// Result of an operation addressed by a 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The position existed and the change was applied and persisted.
    Applied(T),
    /// No contact at that position. Nothing was changed or written.
    NotFound { index: usize },
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::NotFound { .. } => None,
        }
    }
}
