use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Resource URL has no numeric id: {url}")]
    InvalidResourceUrl { url: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PokedexError>;
