//! Version pair handed to a retag run

use crate::error::{ConfigError, Result};

/// The tag being replaced and its replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
    old: String,
    new: String,
}

impl VersionPair {
    /// Build a pair, rejecting empty tags. `old == new` is allowed.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Result<Self> {
        let old = old.into();
        let new = new.into();

        if old.is_empty() || new.is_empty() {
            return Err(ConfigError::EmptyVersion.into());
        }

        Ok(VersionPair { old, new })
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_tag(&self) -> &str {
        &self.new
    }
}
