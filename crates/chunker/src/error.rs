use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur during chunking
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Invalid configuration (bad strategy name or size parameters)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error while reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the source text
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ChunkerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
