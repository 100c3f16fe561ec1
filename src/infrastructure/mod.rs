//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod git;
pub mod resolver;
pub mod workspace;

pub use config::RetagConfig;
pub use resolver::InputResolver;
pub use workspace::{FileSystemWorkspace, Workspace};
