//! Project manifest (package.json) reading, merging, and rewriting
//!
//! The manifest is read once after generation, merged with an overlay of
//! resolved dev-dependency versions, and written back exactly once per run.
//! Keys we don't know about are carried through untouched.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Read the project manifest from the target directory
pub fn read_manifest(project_dir: &Path) -> Result<Value> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write the project manifest back, pretty-printed with a trailing newline
pub fn write_manifest(project_dir: &Path, manifest: &Value) -> Result<()> {
    let path = project_dir.join(MANIFEST_FILE);
    let mut content =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    content.push('\n');
    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Structural merge of two JSON documents: objects merge recursively, and the
/// overlay wins wherever both sides define a scalar or array.
pub fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_disjoint_keys_is_union() {
        let merged = merge(json!({"name": "app"}), json!({"private": true}));
        assert_eq!(merged, json!({"name": "app", "private": true}));
    }

    #[test]
    fn test_merge_overlay_wins_on_scalars() {
        let merged = merge(json!({"version": "0.0.1"}), json!({"version": "1.0.0"}));
        assert_eq!(merged, json!({"version": "1.0.0"}));
    }

    #[test]
    fn test_merge_nested_objects_recursively() {
        let base = json!({
            "devDependencies": {"vite": "^5.0.0"},
            "scripts": {"dev": "vite dev"}
        });
        let overlay = json!({
            "devDependencies": {"tailwindcss": "^3.4.0"},
            "scripts": {}
        });
        let merged = merge(base, overlay);
        assert_eq!(
            merged,
            json!({
                "devDependencies": {"vite": "^5.0.0", "tailwindcss": "^3.4.0"},
                "scripts": {"dev": "vite dev"}
            })
        );
    }

    #[test]
    fn test_merge_is_associative_left_to_right() {
        let a = json!({"x": {"a": 1}, "y": 1});
        let b = json!({"x": {"b": 2}, "y": 2});
        let c = json!({"x": {"a": 3}, "z": 3});
        let left = merge(merge(a.clone(), b.clone()), c.clone());
        let right = merge(a, merge(b, c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_merge_carries_unknown_keys() {
        let base = json!({"type": "module", "workspaces": ["packages/*"]});
        let merged = merge(base.clone(), json!({"scripts": {}}));
        assert_eq!(merged["type"], json!("module"));
        assert_eq!(merged["workspaces"], json!(["packages/*"]));
    }

    #[test]
    fn test_manifest_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = json!({"name": "my-app", "devDependencies": {}});
        write_manifest(dir.path(), &manifest).unwrap();
        let read_back = read_manifest(dir.path()).unwrap();
        assert_eq!(read_back, manifest);

        // The file ends with a newline, as package managers write it
        let raw = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(raw.ends_with('\n'));
    }
}
