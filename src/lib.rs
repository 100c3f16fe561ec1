//! retag - Release tag rewriting
//!
//! Replaces an old version string with a new one across a configured list of
//! project files, reporting the outcome for each file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RetagError;
