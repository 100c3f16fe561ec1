//! Error types for retag

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the run's inputs. Raised before any target is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Marker file not found: {0}")]
    MissingMarkerFile(PathBuf),

    #[error("Expected {expected} argument(s), got {actual}")]
    BadArgumentCount { expected: usize, actual: usize },

    #[error("Version tag must not be empty")]
    EmptyVersion,

    #[error("{0}")]
    Invalid(String),
}

/// Main error type for retag
#[derive(Debug, Error)]
pub enum RetagError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Git tag failed: {0}")]
    GitTag(String),
}

impl RetagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RetagError::GitTag(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RetagError::Config(ConfigError::BadArgumentCount { expected, actual }) => {
                let usage = match expected {
                    1 => "retag <new_tag>",
                    _ => "retag <last_tag> <new_tag>",
                };
                format!(
                    "Expected {} argument(s), got {}\n\n\
                    Usage: {}",
                    expected, actual, usage
                )
            }
            RetagError::Config(ConfigError::MissingMarkerFile(path)) => {
                format!(
                    "Marker file not found: {}\n\n\
                    Suggestions:\n\
                    • Create it with the current version, e.g. echo 0.1.0 > {}\n\
                    • Point [source] path in retag.toml at the right file\n\
                    • Switch to explicit mode: retag <last_tag> <new_tag>",
                    path.display(),
                    path.display()
                )
            }
            RetagError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse retag.toml: {}\n\n\
                    Expected layout:\n\
                    files = [\"Cargo.toml\", \"README.md\", \"VERSION\"]\n\n\
                    [source]\n\
                    mode = \"marker\"\n\
                    path = \"VERSION\"",
                    e
                )
            }
            RetagError::GitTag(msg) => {
                format!(
                    "Git tag failed: {}\n\n\
                    Files were already updated; create the tag by hand once the problem is fixed.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RetagError
pub type Result<T> = std::result::Result<T, RetagError>;
