//! Per-file outcomes of a retag run

use std::path::PathBuf;

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionStatus {
    /// The file was rewritten (or would be, in a dry run).
    Success,
    /// The path does not exist; skipped.
    NotFound,
    /// Reading or writing the file failed; the file was left as it was.
    WriteError(String),
}

/// Outcome for one entry of the target file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    pub path: PathBuf,
    pub found: bool,
    pub replacements: usize,
    pub status: SubstitutionStatus,
}

impl SubstitutionResult {
    pub fn success(path: PathBuf, replacements: usize) -> Self {
        SubstitutionResult {
            path,
            found: replacements > 0,
            replacements,
            status: SubstitutionStatus::Success,
        }
    }

    pub fn not_found(path: PathBuf) -> Self {
        SubstitutionResult {
            path,
            found: false,
            replacements: 0,
            status: SubstitutionStatus::NotFound,
        }
    }

    pub fn write_error(path: PathBuf, replacements: usize, reason: impl Into<String>) -> Self {
        SubstitutionResult {
            path,
            found: replacements > 0,
            replacements,
            status: SubstitutionStatus::WriteError(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SubstitutionStatus::Success
    }
}
