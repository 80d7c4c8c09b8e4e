use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerListError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Endpoint source error: {0}")]
    SourceError(String),
}

pub type Result<T> = core::result::Result<T, ServerListError>;
