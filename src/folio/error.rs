use thiserror::Error;

/// Errors raised outside the filter core: loading content, reading config,
/// and driving the CLI. The core itself never fails.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid content in {source_name}: {message}")]
    Validation {
        source_name: String,
        message: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FolioError {
    pub fn validation(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        FolioError::Validation {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
