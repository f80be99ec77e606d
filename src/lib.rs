pub mod analyzer;
pub mod checker;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod manifest;
pub mod rules;
pub mod ui;

pub use error::{GuardError, Result};
