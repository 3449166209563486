//! Tooling & Integration Layer
//!
//! Command-line surface over the conversion core.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
