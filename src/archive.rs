//! Archive collaborator boundary
//!
//! The core hands a flattened file set to an external archiver and receives
//! a binary blob back. Encoding is the single asynchronous boundary in the
//! system; the core awaits completion and imposes no timeout, retry, or
//! cancellation policy of its own. The blob's binary layout belongs to the
//! collaborator, not to this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One archive entry per file node. Directories carry no entry; they are
/// implied by the file paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub path: String,
    pub content: String,
}

/// External archive encoder contract.
#[async_trait]
pub trait ArchiveEncoder: Send + Sync {
    /// Encode the entry list into a downloadable blob.
    async fn encode(&self, entries: &[ArchiveEntry]) -> anyhow::Result<Vec<u8>>;
}

/// Reference encoder: serializes the entry list into a deterministic JSON
/// manifest blob. Useful for tests and as a stand-in where no compressing
/// collaborator is wired up.
#[derive(Debug, Default)]
pub struct ManifestEncoder;

#[async_trait]
impl ArchiveEncoder for ManifestEncoder {
    async fn encode(&self, entries: &[ArchiveEntry]) -> anyhow::Result<Vec<u8>> {
        let manifest = serde_json::json!({
            "format": "treeify-manifest",
            "version": 1,
            "entry_count": entries.len(),
            "entries": entries,
        });
        let rendered = serde_json::to_string_pretty(&manifest)?;
        Ok(rendered.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manifest_encoder_produces_parseable_blob() {
        let entries = vec![
            ArchiveEntry {
                path: "a.json".to_string(),
                content: "1".to_string(),
            },
            ArchiveEntry {
                path: "dir/b.txt".to_string(),
                content: "text".to_string(),
            },
        ];
        let blob = ManifestEncoder.encode(&entries).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&blob).unwrap();
        assert_eq!(parsed["format"], "treeify-manifest");
        assert_eq!(parsed["entry_count"], 2);
        assert_eq!(parsed["entries"][1]["path"], "dir/b.txt");
    }

    #[tokio::test]
    async fn manifest_encoder_is_deterministic() {
        let entries = vec![ArchiveEntry {
            path: "x.json".to_string(),
            content: "true".to_string(),
        }];
        let first = ManifestEncoder.encode(&entries).await.unwrap();
        let second = ManifestEncoder.encode(&entries).await.unwrap();
        assert_eq!(first, second);
    }
}
