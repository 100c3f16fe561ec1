//! Version source resolution

use crate::domain::VersionPair;
use crate::error::{ConfigError, RetagError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the "old" tag comes from. Chosen once per deployment in `retag.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum InputResolver {
    /// `retag <new_tag>`: old tag is the trimmed content of the marker file
    #[serde(rename = "marker")]
    MarkerFile { path: PathBuf },
    /// `retag <last_tag> <new_tag>`
    Explicit,
}

impl Default for InputResolver {
    fn default() -> Self {
        InputResolver::MarkerFile {
            path: PathBuf::from("VERSION"),
        }
    }
}

impl InputResolver {
    /// Number of positional arguments this mode takes
    pub fn expected_args(&self) -> usize {
        match self {
            InputResolver::MarkerFile { .. } => 1,
            InputResolver::Explicit => 2,
        }
    }

    /// Build the version pair from CLI arguments, reading the marker file relative to `root`.
    pub fn resolve(&self, root: &Path, args: &[String]) -> Result<VersionPair> {
        let expected = self.expected_args();
        if args.len() != expected {
            return Err(ConfigError::BadArgumentCount {
                expected,
                actual: args.len(),
            }
            .into());
        }

        match self {
            InputResolver::MarkerFile { path } => {
                let old = read_marker(&root.join(path))?;
                VersionPair::new(old, args[0].as_str())
            }
            InputResolver::Explicit => VersionPair::new(args[0].as_str(), args[1].as_str()),
        }
    }
}

fn read_marker(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RetagError::from(ConfigError::MissingMarkerFile(path.to_path_buf()))
        } else {
            RetagError::Io(e)
        }
    })?;

    Ok(contents.trim().to_string())
}
