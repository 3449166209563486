use std::fs;

use tempfile::TempDir;
use treeify::tooling::cli::{CliContext, Commands};

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn stats_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "doc.json", r#"{"a": 1, "b": {"c": 2}}"#);

    let cli = CliContext::new(None).unwrap();
    let output = cli
        .execute(&Commands::Stats {
            input,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("files").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(parsed.get("directories").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("depth").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("total_nodes").and_then(|v| v.as_u64()), Some(3));
}

#[test]
fn convert_json_contract_is_a_tagged_tree() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "doc.json", r#"{"dir": {}, "leaf": true}"#);

    let cli = CliContext::new(None).unwrap();
    let output = cli
        .execute(&Commands::Convert {
            input,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let children = parsed
        .get("children")
        .and_then(|v| v.as_array())
        .expect("children array should exist");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["kind"], "directory");
    assert_eq!(children[0]["name"], "dir");
    assert_eq!(children[1]["kind"], "file");
    assert_eq!(children[1]["name"], "leaf.json");
    assert_eq!(children[1]["content"], "true");
}

#[test]
fn list_json_contract_has_entries_and_total() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "doc.json", r#"[1, 2, {"x": 3}]"#);

    let cli = CliContext::new(None).unwrap();
    let output = cli
        .execute(&Commands::List {
            input: input.clone(),
            files_only: false,
            dirs_only: false,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(4));
    let entries = parsed
        .get("entries")
        .and_then(|v| v.as_array())
        .expect("entries array should exist");
    let paths: Vec<&str> = entries
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec!["item_0.json", "item_1.json", "item_2", "item_2/x.json"]
    );

    let output = cli
        .execute(&Commands::List {
            input,
            files_only: true,
            dirs_only: false,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(3));
}

#[test]
fn find_json_contract_reports_found_and_missing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "doc.json", r#"{"config": {"debug": true}}"#);

    let cli = CliContext::new(None).unwrap();
    let output = cli
        .execute(&Commands::Find {
            input: input.clone(),
            path: "config/debug.json".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["node"]["kind"], "file");
    assert_eq!(parsed["node"]["content"], "true");

    let output = cli
        .execute(&Commands::Find {
            input,
            path: "config/missing".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["found"], false);
    assert!(parsed["node"].is_null());
}

#[test]
fn pack_writes_a_manifest_blob() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "doc.json", r#"{"a": 1, "d": {"b": 2}}"#);
    let output_path = temp_dir.path().join("out.blob");

    let cli = CliContext::new(None).unwrap();
    let message = cli
        .execute(&Commands::Pack {
            input,
            output: output_path.clone(),
            sorted: false,
        })
        .unwrap();
    assert!(message.contains("Packed 2 entries"));

    let blob = fs::read(&output_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&blob).unwrap();
    assert_eq!(parsed["format"], "treeify-manifest");
    assert_eq!(parsed["entry_count"], 2);
    assert_eq!(parsed["entries"][1]["path"], "d/b.json");
}

#[test]
fn validate_json_contract_reports_validity() {
    let temp_dir = TempDir::new().unwrap();
    let valid = write_input(&temp_dir, "valid.json", r#"{"dir": {"f.txt": "x"}}"#);
    let invalid = write_input(&temp_dir, "invalid.json", r#"[1, 2]"#);

    let cli = CliContext::new(None).unwrap();
    let output = cli
        .execute(&Commands::Validate {
            input: valid,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["valid"], true);

    let output = cli
        .execute(&Commands::Validate {
            input: invalid,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["valid"], false);
}

#[test]
fn invalid_json_input_surfaces_as_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "bad.json", "{not json");

    let cli = CliContext::new(None).unwrap();
    let result = cli.execute(&Commands::Stats {
        input,
        format: "json".to_string(),
    });
    assert!(result.is_err());
}

#[test]
fn missing_input_file_surfaces_as_an_error() {
    let cli = CliContext::new(None).unwrap();
    let result = cli.execute(&Commands::Stats {
        input: "/nonexistent/doc.json".to_string(),
        format: "json".to_string(),
    });
    assert!(result.is_err());
}
