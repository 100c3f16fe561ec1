//! CLI argument definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "retag")]
#[command(
    about = "Rewrite a release tag across the project's manifests and docs",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// <new_tag> in marker mode, <last_tag> <new_tag> in explicit mode
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Create a git tag named after the new version once all files are processed
    #[arg(long)]
    pub git_tag: bool,

    /// Log per-file progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
