use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Character {character:?} not found in {table}")]
    LookupError { character: char, table: &'static str },

    #[error("Ambiguous checkerboard stream: {0}")]
    AmbiguityError(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
