//! Retag use case

use crate::domain::{replace_literal, SubstitutionResult, SubstitutionStatus, VersionPair};
use crate::infrastructure::Workspace;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct RetagOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagReport {
    pub pair: VersionPair,
    pub results: Vec<SubstitutionResult>,
    pub dry_run: bool,
}

impl RetagReport {
    pub fn updated(&self) -> usize {
        self.count(|status| matches!(status, SubstitutionStatus::Success))
    }

    pub fn not_found(&self) -> usize {
        self.count(|status| matches!(status, SubstitutionStatus::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, SubstitutionStatus::WriteError(_)))
    }

    pub fn total_replacements(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.replacements)
            .sum()
    }

    fn count(&self, pred: impl Fn(&SubstitutionStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Substitute `pair.old` with `pair.new` in every target, in list order.
///
/// Best effort: a missing or unwritable target is recorded and the pass moves
/// on. Files already rewritten stay rewritten. Existing targets are rewritten
/// even when they hold no occurrence.
pub fn retag<W: Workspace>(
    workspace: &W,
    pair: &VersionPair,
    files: &[PathBuf],
    options: &RetagOptions,
) -> RetagReport {
    let results = files
        .iter()
        .map(|target| retag_file(workspace, pair, target, options.dry_run))
        .collect();

    RetagReport {
        pair: pair.clone(),
        results,
        dry_run: options.dry_run,
    }
}

fn retag_file<W: Workspace>(
    workspace: &W,
    pair: &VersionPair,
    target: &Path,
    dry_run: bool,
) -> SubstitutionResult {
    if !workspace.exists(target) {
        warn!(path = %target.display(), "target not found");
        return SubstitutionResult::not_found(target.to_path_buf());
    }

    let content = match workspace.read_text(target) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %target.display(), error = %e, "failed to read target");
            return SubstitutionResult::write_error(target.to_path_buf(), 0, e.to_string());
        }
    };

    let substitution = replace_literal(&content, pair.old(), pair.new_tag());

    if !dry_run {
        if let Err(e) = workspace.write_text(target, &substitution.content) {
            warn!(path = %target.display(), error = %e, "failed to write target");
            return SubstitutionResult::write_error(
                target.to_path_buf(),
                substitution.replacements,
                e.to_string(),
            );
        }
    }

    debug!(
        path = %target.display(),
        replacements = substitution.replacements,
        dry_run,
        "target processed"
    );
    SubstitutionResult::success(target.to_path_buf(), substitution.replacements)
}
