use thiserror::Error;

#[derive(Error, Debug)]
pub enum BloomError {
    #[error("No plant matches {0}")]
    PlantNotFound(String),

    #[error("Ambiguous selector {0}")]
    Ambiguous(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid watering interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BloomError>;
