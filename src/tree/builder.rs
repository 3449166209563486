//! TreeBuilder: JSON value to file tree transformation
//!
//! Deterministic naming rules: object keys are sanitized into safe path
//! segments, array elements are named `item_{index}` to preserve order, and
//! scalar values become files whose extension follows the naming policy
//! (`.txt` for long strings emitted verbatim, `.json` otherwise with the
//! value printed as JSON). Sibling name collisions after sanitization are
//! resolved with a numeric suffix.

use crate::error::ApiError;
use crate::tree::{join_path, DirectoryNode, FileNode, FileTree, TreeNode};
use serde_json::Value;
use std::collections::HashSet;

/// Strings longer than this are treated as prose and written verbatim as
/// `.txt`; everything else is rendered as `.json`.
pub const DEFAULT_LONG_STRING_THRESHOLD: usize = 100;

/// Recursion guard against pathological nesting. serde_json applies its own
/// parse-time limit in the same range.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// File stem used when the root value is a bare scalar.
pub const DEFAULT_SCALAR_ROOT_STEM: &str = "data";

/// Naming and recursion policy for a conversion.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub long_string_threshold: usize,
    pub scalar_root_stem: String,
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            long_string_threshold: DEFAULT_LONG_STRING_THRESHOLD,
            scalar_root_stem: DEFAULT_SCALAR_ROOT_STEM.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Build a file tree from a parsed JSON value.
///
/// Objects and arrays become directory levels; scalars become files. The
/// only failure mode for well-formed JSON is the recursion guard: parse
/// failures belong to the caller, before this point.
pub fn build_tree(value: &Value, opts: &BuildOptions) -> Result<FileTree, ApiError> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(FileTree {
            children: build_children(value, "", 1, opts)?,
        }),
        scalar => {
            let mut used = HashSet::new();
            let node = scalar_file(&opts.scalar_root_stem, scalar, "", &mut used, opts);
            Ok(FileTree {
                children: vec![TreeNode::File(node)],
            })
        }
    }
}

fn build_children(
    container: &Value,
    parent_path: &str,
    depth: usize,
    opts: &BuildOptions,
) -> Result<Vec<TreeNode>, ApiError> {
    if depth > opts.max_depth {
        return Err(ApiError::DepthLimit {
            limit: opts.max_depth,
        });
    }
    let mut used = HashSet::new();
    let mut children = Vec::new();
    match container {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let stem = format!("item_{}", index);
                children.push(build_node(&stem, item, parent_path, depth, &mut used, opts)?);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let stem = sanitize_name(key);
                children.push(build_node(&stem, item, parent_path, depth, &mut used, opts)?);
            }
        }
        _ => {}
    }
    Ok(children)
}

fn build_node(
    stem: &str,
    value: &Value,
    parent_path: &str,
    depth: usize,
    used: &mut HashSet<String>,
    opts: &BuildOptions,
) -> Result<TreeNode, ApiError> {
    match value {
        Value::Object(_) | Value::Array(_) => {
            let name = unique_name(stem, used);
            let path = join_path(parent_path, &name);
            let children = build_children(value, &path, depth + 1, opts)?;
            Ok(TreeNode::Directory(DirectoryNode {
                name,
                path,
                children,
            }))
        }
        scalar => Ok(TreeNode::File(scalar_file(
            stem,
            scalar,
            parent_path,
            used,
            opts,
        ))),
    }
}

fn scalar_file(
    stem: &str,
    value: &Value,
    parent_path: &str,
    used: &mut HashSet<String>,
    opts: &BuildOptions,
) -> FileNode {
    let (ext, content) = render_scalar(value, opts);
    let name = unique_file_name(stem, ext, used);
    let path = join_path(parent_path, &name);
    FileNode {
        name,
        path,
        content,
    }
}

/// Render a scalar per the naming policy: long strings verbatim as `txt`,
/// everything else as its JSON text form.
fn render_scalar(value: &Value, opts: &BuildOptions) -> (&'static str, String) {
    if let Value::String(s) = value {
        if s.chars().count() > opts.long_string_threshold {
            return ("txt", s.clone());
        }
    }
    ("json", value.to_string())
}

/// Sanitize a raw JSON key into a file-system-safe path segment.
///
/// Trims surrounding whitespace; maps `< > : " / \ | ? *` and interior
/// whitespace to `_`; collapses underscore runs to one. An empty result
/// falls back to `unnamed`.
pub fn sanitize_name(raw: &str) -> String {
    const ILLEGAL: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut out = String::with_capacity(raw.len());
    let mut prev_underscore = false;
    for ch in raw.trim().chars() {
        let mapped = if ILLEGAL.contains(&ch) || ch.is_whitespace() {
            '_'
        } else {
            ch
        };
        if mapped == '_' {
            if prev_underscore {
                continue;
            }
            prev_underscore = true;
        } else {
            prev_underscore = false;
        }
        out.push(mapped);
    }
    if out.is_empty() {
        "unnamed".to_string()
    } else {
        out
    }
}

fn unique_name(stem: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = stem.to_string();
    let mut suffix = 2;
    while used.contains(&candidate) {
        candidate = format!("{}_{}", stem, suffix);
        suffix += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn unique_file_name(stem: &str, ext: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = format!("{}.{}", stem, ext);
    let mut suffix = 2;
    while used.contains(&candidate) {
        candidate = format!("{}_{}.{}", stem, suffix, ext);
        suffix += 1;
    }
    used.insert(candidate.clone());
    candidate
}
