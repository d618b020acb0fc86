//! Error types for git-keywords

use thiserror::Error;

/// Main error type for the keyword filter
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("Argument error: {0}")]
    Argument(String),

    #[error("Failed to launch '{program}': {source}")]
    ToolInvocation {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl KeywordError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type using KeywordError
pub type Result<T> = std::result::Result<T, KeywordError>;
