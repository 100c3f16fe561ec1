//! Application layer - Use cases and orchestration

pub mod retag;
pub mod service;

pub use retag::{retag, RetagOptions, RetagReport};
pub use service::RetagService;
