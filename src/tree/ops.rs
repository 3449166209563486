//! TreeOps: pure query and transform operations over a file tree
//!
//! Every operation takes a tree by reference and returns a new value.
//! Lookups use sentinel results (`None`, `false`) rather than errors; these
//! are routine queries, not exceptional conditions.

use crate::archive::ArchiveEntry;
use crate::tree::{join_path, DirectoryNode, FileNode, FileTree, NodeKind, TreeNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a flattened tree, depth-first with parents before children.
/// Files carry content; directories carry their direct child count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_count: Option<usize>,
}

/// Aggregate tree statistics. `total_nodes = files + directories`; the
/// unnamed root level is not a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub files: usize,
    pub directories: usize,
    pub depth: usize,
    pub total_nodes: usize,
}

/// Flatten a tree into a depth-first ordered listing.
pub fn flatten(tree: &FileTree) -> Vec<FlatEntry> {
    let mut out = Vec::new();
    flatten_level(&tree.children, &mut out);
    out
}

fn flatten_level(children: &[TreeNode], out: &mut Vec<FlatEntry>) {
    for node in children {
        match node {
            TreeNode::File(f) => out.push(FlatEntry {
                name: f.name.clone(),
                path: f.path.clone(),
                kind: NodeKind::File,
                content: Some(f.content.clone()),
                child_count: None,
            }),
            TreeNode::Directory(d) => {
                out.push(FlatEntry {
                    name: d.name.clone(),
                    path: d.path.clone(),
                    kind: NodeKind::Directory,
                    content: None,
                    child_count: Some(d.children.len()),
                });
                flatten_level(&d.children, out);
            }
        }
    }
}

/// Paths of all file leaves, depth-first.
pub fn file_paths(tree: &FileTree) -> Vec<String> {
    flatten(tree)
        .into_iter()
        .filter(|e| e.kind == NodeKind::File)
        .map(|e| e.path)
        .collect()
}

/// Paths of all directories, depth-first, each before its descendants.
pub fn directory_paths(tree: &FileTree) -> Vec<String> {
    flatten(tree)
        .into_iter()
        .filter(|e| e.kind == NodeKind::Directory)
        .map(|e| e.path)
        .collect()
}

/// Walk a `/`-delimited path child by child. Empty segments are discarded;
/// an empty path or a missing segment yields `None`.
pub fn find_by_path<'a>(tree: &'a FileTree, path: &str) -> Option<&'a TreeNode> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let first = segments.next()?;
    let mut current = tree.children.iter().find(|c| c.name() == first)?;
    for segment in segments {
        match current {
            TreeNode::Directory(d) => current = d.child(segment)?,
            TreeNode::File(_) => return None,
        }
    }
    Some(current)
}

/// Maximum directory nesting. A tree with no directories has depth 0.
pub fn depth(tree: &FileTree) -> usize {
    level_depth(&tree.children)
}

fn level_depth(children: &[TreeNode]) -> usize {
    children
        .iter()
        .filter_map(|node| match node {
            TreeNode::Directory(d) => Some(1 + level_depth(&d.children)),
            TreeNode::File(_) => None,
        })
        .max()
        .unwrap_or(0)
}

pub fn count_files(tree: &FileTree) -> usize {
    count_level(&tree.children).0
}

pub fn count_directories(tree: &FileTree) -> usize {
    count_level(&tree.children).1
}

fn count_level(children: &[TreeNode]) -> (usize, usize) {
    let mut files = 0;
    let mut dirs = 0;
    for node in children {
        match node {
            TreeNode::File(_) => files += 1,
            TreeNode::Directory(d) => {
                let (f, dr) = count_level(&d.children);
                files += f;
                dirs += 1 + dr;
            }
        }
    }
    (files, dirs)
}

/// Compute aggregate statistics in one pass over the counts and depth.
pub fn stats(tree: &FileTree) -> TreeStats {
    let (files, directories) = count_level(&tree.children);
    TreeStats {
        files,
        directories,
        depth: depth(tree),
        total_nodes: files + directories,
    }
}

/// Return a new tree with every sibling group ordered directories-first,
/// then ascending by name within each group. Idempotent.
pub fn sort_tree(tree: &FileTree) -> FileTree {
    FileTree {
        children: sort_level(&tree.children),
    }
}

fn sort_level(children: &[TreeNode]) -> Vec<TreeNode> {
    let mut sorted: Vec<TreeNode> = children
        .iter()
        .map(|node| match node {
            TreeNode::Directory(d) => TreeNode::Directory(DirectoryNode {
                name: d.name.clone(),
                path: d.path.clone(),
                children: sort_level(&d.children),
            }),
            TreeNode::File(f) => TreeNode::File(f.clone()),
        })
        .collect();
    sorted.sort_by(|a, b| {
        let rank = |n: &TreeNode| match n {
            TreeNode::Directory(_) => 0,
            TreeNode::File(_) => 1,
        };
        rank(a).cmp(&rank(b)).then_with(|| a.name().cmp(b.name()))
    });
    sorted
}

/// Validate the mapping form of a tree: a non-array JSON object whose every
/// value is either a nested valid mapping (directory) or any non-object
/// value (file leaf). Arrays and primitives are invalid at any level; `{}`
/// is a valid empty directory.
pub fn is_valid_tree(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().all(|child| match child {
            Value::Object(_) => is_valid_tree(child),
            Value::Array(_) => false,
            _ => true,
        }),
        _ => false,
    }
}

/// Reconstruct a tree from a flat list of `/`-delimited file paths.
///
/// Intermediate directories are created on demand and every final segment
/// becomes a file with `default_content`. A segment previously created as a
/// file and later addressed as a directory is overwritten (last-write-wins).
/// Blank entries are skipped.
pub fn tree_from_paths<S: AsRef<str>>(paths: &[S], default_content: &str) -> FileTree {
    let mut children = Vec::new();
    for path in paths {
        let segments: Vec<&str> = path
            .as_ref()
            .split('/')
            .filter(|s| !s.trim().is_empty())
            .collect();
        if segments.is_empty() {
            continue;
        }
        insert_path(&mut children, "", &segments, default_content);
    }
    FileTree { children }
}

fn insert_path(children: &mut Vec<TreeNode>, parent_path: &str, segments: &[&str], content: &str) {
    let name = segments[0];
    let path = join_path(parent_path, name);
    if segments.len() == 1 {
        let file = TreeNode::File(FileNode {
            name: name.to_string(),
            path,
            content: content.to_string(),
        });
        if let Some(existing) = children.iter_mut().find(|c| c.name() == name) {
            *existing = file;
        } else {
            children.push(file);
        }
        return;
    }
    let index = match children.iter().position(|c| c.name() == name) {
        Some(i) => {
            if !matches!(children[i], TreeNode::Directory(_)) {
                children[i] = TreeNode::Directory(DirectoryNode {
                    name: name.to_string(),
                    path: path.clone(),
                    children: Vec::new(),
                });
            }
            i
        }
        None => {
            children.push(TreeNode::Directory(DirectoryNode {
                name: name.to_string(),
                path: path.clone(),
                children: Vec::new(),
            }));
            children.len() - 1
        }
    };
    if let TreeNode::Directory(dir) = &mut children[index] {
        insert_path(&mut dir.children, &path, &segments[1..], content);
    }
}

/// Archive entries for the external collaborator: one per file, depth-first.
/// Directories need no explicit entry; they are implied by the file paths.
pub fn archive_entries(tree: &FileTree) -> Vec<ArchiveEntry> {
    let mut out = Vec::new();
    collect_entries(&tree.children, &mut out);
    out
}

fn collect_entries(children: &[TreeNode], out: &mut Vec<ArchiveEntry>) {
    for node in children {
        match node {
            TreeNode::File(f) => out.push(ArchiveEntry {
                path: f.path.clone(),
                content: f.content.clone(),
            }),
            TreeNode::Directory(d) => collect_entries(&d.children, out),
        }
    }
}
