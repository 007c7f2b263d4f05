use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid phone number: {0} (expected +380XXXXXXXXX)")]
    InvalidPhone(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid birthday: {0} (expected day.month.year)")]
    InvalidBirthday(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type BookResult<T> = Result<T, BookError>;
