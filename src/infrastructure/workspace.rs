//! File system workspace holding the target files

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::{RetagConfig, CONFIG_FILE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Abstract view of the repository a run operates on
pub trait Workspace {
    /// Get the root directory target paths are resolved against
    fn root(&self) -> &Path;

    /// Load retag.toml (or the default layout)
    fn load_config(&self) -> Result<RetagConfig>;

    /// Check if a target exists
    fn exists(&self, target: &Path) -> bool;

    /// Read a target's full text
    fn read_text(&self, target: &Path) -> io::Result<String>;

    /// Replace a target's content entirely, writing to the same path
    fn write_text(&self, target: &Path, content: &str) -> io::Result<()>;
}

/// File system implementation of Workspace
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover the workspace root.
    /// Checks RETAG_ROOT first, then walks up looking for retag.toml,
    /// then settles on the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("RETAG_ROOT") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(FileSystemWorkspace::new(path));
            }
            return Err(ConfigError::Invalid(format!(
                "RETAG_ROOT is set to '{}' but it is not a directory",
                path.display()
            ))
            .into());
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Walk up from `start` to the nearest directory holding retag.toml.
    /// Falls back to `start` itself.
    pub fn discover_from(start: &Path) -> Self {
        let mut current = start;

        loop {
            if current.join(CONFIG_FILE).is_file() {
                return FileSystemWorkspace::new(current.to_path_buf());
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return FileSystemWorkspace::new(start.to_path_buf()),
            }
        }
    }

    /// Resolve a target path against the root (absolute paths pass through)
    pub fn resolve(&self, target: &Path) -> PathBuf {
        self.root.join(target)
    }
}

impl Workspace for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<RetagConfig> {
        RetagConfig::load_from_dir(&self.root)
    }

    fn exists(&self, target: &Path) -> bool {
        self.resolve(target).exists()
    }

    fn read_text(&self, target: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(target))
    }

    fn write_text(&self, target: &Path, content: &str) -> io::Result<()> {
        fs::write(self.resolve(target), content)
    }
}
