//! Domain layer - Version pairs, substitution and outcomes

pub mod outcome;
pub mod substitution;
pub mod version;

pub use outcome::{SubstitutionResult, SubstitutionStatus};
pub use substitution::{replace_literal, Substitution};
pub use version::VersionPair;
