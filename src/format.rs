//! Format tree stats, listings, and previews as text.

use crate::tree::ops::{FlatEntry, TreeStats};
use crate::tree::{FileTree, NodeKind, TreeNode};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format tree statistics as human-readable text.
pub fn format_stats_text(stats: &TreeStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Tree Statistics")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Files".to_string(), stats.files.to_string()]);
    table.add_row(vec!["Directories".to_string(), stats.directories.to_string()]);
    table.add_row(vec!["Depth".to_string(), stats.depth.to_string()]);
    table.add_row(vec!["Total nodes".to_string(), stats.total_nodes.to_string()]);
    out.push_str(&format!("{}\n", table));
    out
}

/// Format a flattened listing as human-readable text.
pub fn format_listing_text(entries: &[FlatEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Entries")));
    if entries.is_empty() {
        out.push_str("Empty tree.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Kind", "Detail"]);
    for entry in entries {
        let (kind, detail) = match entry.kind {
            NodeKind::File => (
                "file",
                format!(
                    "{} bytes",
                    entry.content.as_ref().map(|c| c.len()).unwrap_or(0)
                ),
            ),
            NodeKind::Directory => (
                "dir",
                format!("{} children", entry.child_count.unwrap_or(0)),
            ),
        };
        table.add_row(vec![entry.path.clone(), kind.to_string(), detail]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} entries.\n", entries.len()));
    out
}

/// Format an indented tree preview. Directories carry a trailing slash.
pub fn format_tree_text(tree: &FileTree) -> String {
    let mut out = String::new();
    if tree.is_empty() {
        out.push_str("(empty tree)\n");
        return out;
    }
    render_level(&tree.children, 0, &mut out);
    out
}

fn render_level(children: &[TreeNode], indent: usize, out: &mut String) {
    for node in children {
        for _ in 0..indent {
            out.push_str("  ");
        }
        match node {
            TreeNode::File(f) => {
                out.push_str(&f.name);
                out.push('\n');
            }
            TreeNode::Directory(d) => {
                out.push_str(&format!("{}/\n", d.name));
                render_level(&d.children, indent + 1, out);
            }
        }
    }
}

/// Format a single node lookup result as human-readable text.
pub fn format_node_text(node: &TreeNode) -> String {
    let mut out = String::new();
    match node {
        TreeNode::File(f) => {
            out.push_str(&format!("File: {}\n", f.path));
            out.push_str(&format!("Content:\n{}\n", f.content));
        }
        TreeNode::Directory(d) => {
            out.push_str(&format!("Directory: {}\n", d.path));
            out.push_str(&format!("Children: {}\n", d.children.len()));
            for child in &d.children {
                out.push_str(&format!("  {}\n", child.name()));
            }
        }
    }
    out
}
