//! Release retagging service: resolve inputs, rewrite targets, optionally tag

use crate::application::retag::{retag, RetagOptions, RetagReport};
use crate::error::Result;
use crate::infrastructure::{git, FileSystemWorkspace, Workspace};
use tracing::info;

/// Service running one retag pass over a workspace
pub struct RetagService {
    workspace: FileSystemWorkspace,
}

impl RetagService {
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        RetagService { workspace }
    }

    /// Resolve the version pair from `args` and retag every configured target.
    ///
    /// Configuration and argument errors abort before any file is touched.
    pub fn execute(&self, args: &[String], options: &RetagOptions) -> Result<RetagReport> {
        let config = self.workspace.load_config()?;
        let pair = config.source.resolve(self.workspace.root(), args)?;

        info!(
            root = %self.workspace.root().display(),
            old = pair.old(),
            new = pair.new_tag(),
            targets = config.files.len(),
            dry_run = options.dry_run,
            "retag starting"
        );

        let report = retag(&self.workspace, &pair, &config.files, options);

        info!(
            updated = report.updated(),
            not_found = report.not_found(),
            failed = report.failed(),
            "retag finished"
        );

        Ok(report)
    }

    /// Tag HEAD with the new version
    pub fn tag(&self, report: &RetagReport) -> Result<()> {
        git::create_tag(self.workspace.root(), report.pair.new_tag())?;
        info!(tag = report.pair.new_tag(), "git tag created");
        Ok(())
    }
}
