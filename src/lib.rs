//! Treeify: JSON documents as file trees
//!
//! Converts an arbitrary JSON value into a hierarchical file/folder tree with
//! deterministic naming rules, and provides pure query/transform operations
//! over that tree. A flattened file set can be handed to an external archive
//! collaborator for packaging.

pub mod archive;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod tree;
