use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preference store error: {0}")]
    Prefs(String),
}

pub type Result<T> = std::result::Result<T, StartuiError>;
