use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiteralGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid token definition {path}: {message}")]
    Tokens { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LiteralGuardError {
    /// Short label used as the error headline on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::PathNotFound(_) => "Input",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Tokens { .. } => "Tokens",
            Self::Json(_) => "Serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, LiteralGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
