//! Error taxonomy for the conversion core.
//!
//! Tree queries never raise: a missing path is `None`, an invalid mapping
//! shape is `false`. Errors here cover the boundaries around the core: JSON
//! parsing, the archive collaborator, configuration, and I/O.

use thiserror::Error;

/// Top-level error type surfaced to callers of the library and CLI.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Raw text failed to parse as JSON. No tree is built; a previously
    /// loaded tree is left untouched.
    #[error("Invalid JSON input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The external archive collaborator failed. Core state is unaffected
    /// since archiving is read-only over the tree.
    #[error("Archive encoding failed: {0}")]
    ArchiveEncoding(String),

    /// JSON nesting exceeded the configured recursion guard.
    #[error("JSON nesting exceeds the depth limit of {limit}")]
    DepthLimit { limit: usize },

    /// Configuration or logging setup failure.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A session operation that needs a tree was called before a load.
    #[error("No tree loaded; supply a JSON document first")]
    NoTree,
}
