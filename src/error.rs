//! Error types for doctag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the doctag application
#[derive(Debug, Error)]
pub enum DoctagError {
    #[error("Not a doctag directory: {0}")]
    NotDoctagDirectory(PathBuf),

    #[error("Tag not found in index: {0}")]
    TagNotFound(String),

    #[error("No search paths configured")]
    NoSearchPaths,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External search error: {0}")]
    Search(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DoctagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DoctagError::NotDoctagDirectory(_) => 2,
            DoctagError::TagNotFound(_) => 3,
            DoctagError::NoSearchPaths => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DoctagError::NotDoctagDirectory(path) => {
                format!(
                    "Not a doctag directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'doctag init' in this directory to create a configuration\n\
                    • Navigate to a directory with an existing .doctag/config.toml\n\
                    • Set DOCTAG_ROOT environment variable to your configuration root\n\
                    • Set DOCTAG_PATH to a list of documentation directories",
                    path.display()
                )
            }
            DoctagError::TagNotFound(tag) => {
                format!(
                    "Tag not found in index: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'doctag list' to see indexed tags\n\
                    • Check the search paths: doctag config paths\n\
                    • For localized tags, try the plain name or 'tag@lang'",
                    tag
                )
            }
            DoctagError::NoSearchPaths => {
                "No search paths configured\n\n\
                Suggestions:\n\
                • Pass directories with --path\n\
                • Set DOCTAG_PATH (colon-separated list of directories)\n\
                • Configure paths: doctag config paths '/usr/share/vim/runtime'"
                    .to_string()
            }
            DoctagError::Search(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that 'grep' is installed and in PATH\n\
                    • Switch to the in-memory resolver: doctag config resolver memory",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DoctagError
pub type Result<T> = std::result::Result<T, DoctagError>;
