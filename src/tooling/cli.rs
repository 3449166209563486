//! CLI Tooling
//!
//! Command-line interface over the conversion core: convert, inspect, and
//! pack JSON documents as file trees. Every command reads one JSON input
//! (file path or `-` for stdin) and prints text or JSON output.

use crate::archive::ManifestEncoder;
use crate::config::{ConfigLoader, TreeifyConfig};
use crate::error::ApiError;
use crate::format::{
    format_listing_text, format_node_text, format_stats_text, format_tree_text,
};
use crate::tree::builder::{build_tree, BuildOptions};
use crate::tree::ops;
use crate::tree::{FileTree, NodeKind};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Treeify CLI - JSON documents as file trees
#[derive(Parser)]
#[command(name = "treeify")]
#[command(about = "Convert JSON documents into file/folder trees and package them for archiving")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a JSON document and print the resulting tree
    Convert {
        /// JSON input file, or - for stdin
        input: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show tree statistics (files, directories, depth, total nodes)
    Stats {
        /// JSON input file, or - for stdin
        input: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the flattened tree entries
    List {
        /// JSON input file, or - for stdin
        input: String,
        /// Only list file entries
        #[arg(long, conflicts_with = "dirs_only")]
        files_only: bool,
        /// Only list directory entries
        #[arg(long, conflicts_with = "files_only")]
        dirs_only: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Look up a single node by /-delimited path
    Find {
        /// JSON input file, or - for stdin
        input: String,
        /// Node path, e.g. config/debug.json
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Flatten the tree and encode an archive blob
    Pack {
        /// JSON input file, or - for stdin
        input: String,
        /// Destination file for the encoded blob
        #[arg(long)]
        output: PathBuf,
        /// Sort siblings (directories first, then by name) before encoding
        #[arg(long)]
        sorted: bool,
    },
    /// Check whether a JSON document is a valid tree mapping
    Validate {
        /// JSON input file, or - for stdin
        input: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI execution context: resolved configuration plus derived build options.
pub struct CliContext {
    config: TreeifyConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from the given file
    /// or the default sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    pub fn config(&self) -> &TreeifyConfig {
        &self.config
    }

    fn build_options(&self) -> BuildOptions {
        BuildOptions::from(&self.config.conversion)
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Convert { input, format } => {
                let tree = self.load_tree(input)?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&tree)?)
                } else {
                    Ok(format_tree_text(&tree))
                }
            }
            Commands::Stats { input, format } => {
                let tree = self.load_tree(input)?;
                let stats = ops::stats(&tree);
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&stats)?)
                } else {
                    Ok(format_stats_text(&stats))
                }
            }
            Commands::List {
                input,
                files_only,
                dirs_only,
                format,
            } => {
                let tree = self.load_tree(input)?;
                let entries: Vec<_> = ops::flatten(&tree)
                    .into_iter()
                    .filter(|e| match e.kind {
                        NodeKind::File => !*dirs_only,
                        NodeKind::Directory => !*files_only,
                    })
                    .collect();
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({
                        "total": entries.len(),
                        "entries": entries,
                    }))?)
                } else {
                    Ok(format_listing_text(&entries))
                }
            }
            Commands::Find {
                input,
                path,
                format,
            } => {
                let tree = self.load_tree(input)?;
                let node = ops::find_by_path(&tree, path);
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({
                        "path": path,
                        "found": node.is_some(),
                        "node": node,
                    }))?)
                } else {
                    match node {
                        Some(node) => Ok(format_node_text(node)),
                        None => Ok(format!("Not found: {}", path)),
                    }
                }
            }
            Commands::Pack {
                input,
                output,
                sorted,
            } => {
                let tree = self.load_tree(input)?;
                let tree = if *sorted { ops::sort_tree(&tree) } else { tree };
                let entries = ops::archive_entries(&tree);
                let runtime = tokio::runtime::Runtime::new()?;
                let blob = runtime
                    .block_on(async {
                        use crate::archive::ArchiveEncoder;
                        ManifestEncoder.encode(&entries).await
                    })
                    .map_err(|e| ApiError::ArchiveEncoding(e.to_string()))?;
                std::fs::write(output, &blob)?;
                info!(entries = entries.len(), bytes = blob.len(), "archive blob written");
                Ok(format!(
                    "Packed {} entries ({} bytes) to {}",
                    entries.len(),
                    blob.len(),
                    output.display()
                ))
            }
            Commands::Validate { input, format } => {
                let value = self.read_value(input)?;
                let valid = ops::is_valid_tree(&value);
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({ "valid": valid }))?)
                } else if valid {
                    Ok("Valid tree mapping.".to_string())
                } else {
                    Ok("Not a valid tree mapping.".to_string())
                }
            }
        }
    }

    fn read_value(&self, input: &str) -> Result<serde_json::Value, ApiError> {
        let text = if input == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(input)?
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn load_tree(&self, input: &str) -> Result<FileTree, ApiError> {
        let value = self.read_value(input)?;
        build_tree(&value, &self.build_options())
    }
}
