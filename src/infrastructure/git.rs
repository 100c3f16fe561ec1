//! Git tagging via the system git binary

use crate::error::{RetagError, Result};
use std::path::Path;
use std::process::Command;

/// Create a lightweight tag named `tag` at HEAD of the repository in `root`.
pub fn create_tag(root: &Path, tag: &str) -> Result<()> {
    let output = Command::new("git")
        .current_dir(root)
        .args(["tag", tag])
        .output()
        .map_err(|e| RetagError::GitTag(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(RetagError::GitTag(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_tag_outside_repository_fails() {
        let temp = TempDir::new().unwrap();

        // Either git is missing or the directory is not a repository
        let result = create_tag(temp.path(), "v1.0.0");
        assert!(matches!(result, Err(RetagError::GitTag(_))));
    }
}
