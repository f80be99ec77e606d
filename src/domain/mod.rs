//! Domain logic - pure governance rules independent of git operations

pub mod branch;
pub mod version;

pub use branch::{BranchContext, BranchKind};
pub use version::Version;
