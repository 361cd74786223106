use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile source {source_name} unavailable: {message}")]
    SourceUnavailable { source_name: String, message: String },
}

pub type Result<T> = std::result::Result<T, RatingError>;
