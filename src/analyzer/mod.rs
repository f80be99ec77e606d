//! History analysis

pub mod build_number;

pub use build_number::derive_build_number;
