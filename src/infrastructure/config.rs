//! Configuration management

use crate::error::{ConfigError, Result};
use crate::infrastructure::InputResolver;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up at the repository root
pub const CONFIG_FILE: &str = "retag.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetagConfig {
    /// Target file list, in report order
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub source: InputResolver,
}

impl Default for RetagConfig {
    fn default() -> Self {
        RetagConfig {
            files: vec![
                PathBuf::from("Cargo.toml"),
                PathBuf::from("README.md"),
                PathBuf::from("VERSION"),
            ],
            source: InputResolver::default(),
        }
    }
}

impl RetagConfig {
    /// Path of the config file inside `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load retag.toml from the given directory, or the default layout if it has none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::path_in(path);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RetagConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&contents, path)
    }

    /// Parse and validate config file contents; targets resolve against `root`
    pub fn parse(contents: &str, root: &Path) -> Result<Self> {
        let config: RetagConfig = toml::from_str(contents)?;
        config.validate(root)?;
        Ok(config)
    }

    fn validate(&self, root: &Path) -> Result<()> {
        if self.files.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "No target files listed in {}",
                CONFIG_FILE
            ))
            .into());
        }

        if let InputResolver::MarkerFile { path } = &self.source {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Marker mode needs a non-empty [source] path in {}",
                    CONFIG_FILE
                ))
                .into());
            }

            // The marker must be rewritten too, or the next run reads a stale tag
            let marker = root.join(path);
            if !self.files.iter().any(|target| root.join(target) == marker) {
                return Err(ConfigError::Invalid(format!(
                    "Marker file {} must also be listed in files in {}",
                    path.display(),
                    CONFIG_FILE
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RetagError;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RetagConfig::default();
        assert_eq!(config.files.len(), 3);
        assert_eq!(
            config.source,
            InputResolver::MarkerFile {
                path: PathBuf::from("VERSION")
            }
        );
    }

    #[test]
    fn test_load_missing_config_uses_default() {
        let temp = TempDir::new().unwrap();

        let config = RetagConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, RetagConfig::default());
    }

    #[test]
    fn test_parse_marker_config() {
        let config = RetagConfig::parse(
            r#"
files = ["valu3/Cargo.toml", "README.md", "version"]

[source]
mode = "marker"
path = "version"
"#,
            Path::new("."),
        )
        .unwrap();

        assert_eq!(
            config.files,
            vec![
                PathBuf::from("valu3/Cargo.toml"),
                PathBuf::from("README.md"),
                PathBuf::from("version"),
            ]
        );
        assert_eq!(
            config.source,
            InputResolver::MarkerFile {
                path: PathBuf::from("version")
            }
        );
    }

    #[test]
    fn test_parse_explicit_config() {
        let config = RetagConfig::parse(
            r#"
files = ["Cargo.toml"]

[source]
mode = "explicit"
"#,
            Path::new("."),
        )
        .unwrap();

        assert_eq!(config.source, InputResolver::Explicit);
    }

    #[test]
    fn test_source_defaults_to_marker() {
        let config =
            RetagConfig::parse(r#"files = ["Cargo.toml", "VERSION"]"#, Path::new(".")).unwrap();
        assert_eq!(config.source, InputResolver::default());
    }

    #[test]
    fn test_empty_file_list_rejected() {
        let result = RetagConfig::parse("files = []", Path::new("."));
        match result {
            Err(RetagError::Config(ConfigError::Invalid(msg))) => {
                assert!(msg.contains("No target files"));
            }
            other => panic!("Expected Invalid config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = RetagConfig::parse(
            r#"
files = ["Cargo.toml"]

[source]
mode = "guess"
"#,
            Path::new("."),
        );
        assert!(matches!(result, Err(RetagError::TomlDeserialize(_))));
    }

    #[test]
    fn test_load_from_dir_reads_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "files = [\"a.txt\"]\n\n[source]\nmode = \"explicit\"\n",
        )
        .unwrap();

        let config = RetagConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.files, vec![PathBuf::from("a.txt")]);
        assert_eq!(config.source, InputResolver::Explicit);
    }

    #[test]
    fn test_marker_missing_from_files_rejected() {
        let result = RetagConfig::parse(
            r#"
files = ["manifest.toml"]

[source]
mode = "marker"
path = "VERSION"
"#,
            Path::new("."),
        );
        match result {
            Err(RetagError::Config(ConfigError::Invalid(msg))) => {
                assert!(msg.contains("Marker file VERSION must also be listed"));
            }
            other => panic!("Expected Invalid config error, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_matched_through_equivalent_paths() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("VERSION");
        let contents = format!(
            "files = [\"./VERSION\"]\n\n[source]\nmode = \"marker\"\npath = {:?}\n",
            marker.display().to_string()
        );

        let config = RetagConfig::parse(&contents, temp.path()).unwrap();
        assert_eq!(config.files, vec![PathBuf::from("./VERSION")]);
    }

    #[test]
    fn test_explicit_mode_has_no_marker_requirement() {
        assert!(RetagConfig::parse(
            "files = [\"a.txt\"]\n\n[source]\nmode = \"explicit\"\n",
            Path::new("."),
        )
        .is_ok());
    }
}
