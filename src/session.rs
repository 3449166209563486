//! Conversion session lifecycle
//!
//! Holds at most one tree, built fresh from each JSON input. A failed parse
//! leaves the previous tree untouched; a successful load replaces it; `clear`
//! discards it. Nothing is shared between conversions.

use crate::archive::ArchiveEncoder;
use crate::error::ApiError;
use crate::tree::builder::{build_tree, BuildOptions};
use crate::tree::ops::{self, TreeStats};
use crate::tree::FileTree;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One JSON-to-tree conversion session.
#[derive(Debug, Default)]
pub struct ConversionSession {
    options: BuildOptions,
    tree: Option<FileTree>,
    source: Option<PathBuf>,
}

impl ConversionSession {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            tree: None,
            source: None,
        }
    }

    /// Parse raw JSON text and build a fresh tree from it.
    pub fn load_text(&mut self, text: &str) -> Result<&FileTree, ApiError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let tree = build_tree(&value, &self.options)?;
        debug!(nodes = ops::stats(&tree).total_nodes, "built tree from JSON input");
        self.source = None;
        Ok(self.tree.insert(tree))
    }

    /// Read a JSON file from disk and load it.
    pub fn load_file(&mut self, path: &Path) -> Result<&FileTree, ApiError> {
        let text = std::fs::read_to_string(path)?;
        self.load_text(&text)?;
        self.source = Some(path.to_path_buf());
        info!(source = %path.display(), "loaded JSON document");
        self.tree.as_ref().ok_or(ApiError::NoTree)
    }

    /// Discard the current tree.
    pub fn clear(&mut self) {
        self.tree = None;
        self.source = None;
    }

    pub fn tree(&self) -> Option<&FileTree> {
        self.tree.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn stats(&self) -> Result<TreeStats, ApiError> {
        let tree = self.tree.as_ref().ok_or(ApiError::NoTree)?;
        Ok(ops::stats(tree))
    }

    /// Flatten the current tree and drive the archive collaborator.
    pub async fn pack(&self, encoder: &dyn ArchiveEncoder) -> Result<Vec<u8>, ApiError> {
        let tree = self.tree.as_ref().ok_or(ApiError::NoTree)?;
        let entries = ops::archive_entries(tree);
        let blob = encoder
            .encode(&entries)
            .await
            .map_err(|e| ApiError::ArchiveEncoding(e.to_string()))?;
        info!(entries = entries.len(), bytes = blob.len(), "archive blob encoded");
        Ok(blob)
    }
}
