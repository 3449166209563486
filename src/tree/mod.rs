//! File tree data model
//!
//! A tree derived from a JSON document: files are leaves carrying rendered
//! scalar content, directories are internal nodes for objects and arrays.
//! The node union is tagged with an explicit `kind` discriminator so every
//! consumer matches exhaustively instead of probing shapes.

pub mod builder;
pub mod ops;

use serde::{Deserialize, Serialize};

/// Node discriminator, carried through serialized forms as `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Leaf node: a rendered scalar JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    /// `/`-joined ancestor names including this node; no leading `/`.
    pub path: String,
    pub content: String,
}

/// Internal node: a JSON object or array. Sibling names are unique;
/// insertion order is preserved (array order is semantically meaningful).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    pub path: String,
    pub children: Vec<TreeNode>,
}

/// Tagged node union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File(f) => &f.name,
            TreeNode::Directory(d) => &d.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File(f) => &f.path,
            TreeNode::Directory(d) => &d.path,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::File(_) => NodeKind::File,
            TreeNode::Directory(_) => NodeKind::Directory,
        }
    }
}

impl DirectoryNode {
    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name() == name)
    }
}

/// The root level of a conversion. The root itself carries no name and is
/// excluded from directory counts and depth: a flat JSON object maps to a
/// tree with zero directories and depth 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileTree {
    pub children: Vec<TreeNode>,
}

impl FileTree {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Join a parent path and a child name. Root-level names pass through
/// without a leading separator.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
