//! CLI command implementations.

pub mod config;
pub mod extract;
pub mod fields;
