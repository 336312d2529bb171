use crate::model::Identifier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Invalid name '{0}': use a single word of latin letters and digits")]
    InvalidName(String),

    #[error("Invalid surname '{0}': use a single word of latin letters and digits")]
    InvalidSurname(String),

    #[error("Invalid phone number '{0}': expected 11 digits starting with +7 or 8")]
    InvalidPhone(String),

    #[error("Invalid date of birth '{0}': expected dd.mm.yyyy")]
    InvalidDateOfBirth(String),

    #[error("Unknown option '{0}'")]
    InvalidChoice(String),

    #[error("Contact not found: {0}")]
    NotFound(Identifier),

    #[error("A contact named {0} already exists")]
    AlreadyExists(Identifier),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// True for outcomes the user can correct by trying again from the menu.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            PhonebookError::Io(_) | PhonebookError::Serialization(_) | PhonebookError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
