use anyhow::{Context, Result};
use std::path::Path;

use crate::core::snapshot::ApiSnapshot;

const PREVIEW_CHARS: usize = 500;

fn preview(json_str: &str) -> String {
    if json_str.chars().count() > PREVIEW_CHARS {
        let head: String = json_str.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        json_str.to_string()
    }
}

/// Parse an API snapshot (`api.json`) file
pub fn parse_snapshot_json(json_path: &Path) -> Result<ApiSnapshot> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_snapshot_json_str(&json_content)
        .with_context(|| format!("Failed to parse API snapshot: {}", json_path.display()))
}

/// Parse an API snapshot from a string
///
/// Unknown fields are ignored and missing lists are treated as empty, but the
/// document must be a JSON object. Deserialization errors report the path of the
/// offending value, e.g. `apiGroups[2].apiVersions[0].resources[5].kind`.
pub fn parse_snapshot_json_str(json_str: &str) -> Result<ApiSnapshot> {
    // First validate that it's valid JSON
    let json_value: serde_json::Value = serde_json::from_str(json_str).with_context(|| {
        format!(
            "Invalid JSON syntax. First {} chars: {}",
            PREVIEW_CHARS,
            preview(json_str)
        )
    })?;

    if !json_value.is_object() {
        anyhow::bail!(
            "API snapshot must be a JSON object, found: {}",
            preview(&json_value.to_string())
        );
    }

    serde_path_to_error::deserialize(json_value).map_err(|e| {
        let path = e.path().to_string();
        anyhow::anyhow!("JSON deserialization error at '{}': {}", path, e.into_inner())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_snapshot() {
        let snapshot = parse_snapshot_json_str(r#"{"apiGroups": []}"#).unwrap();
        assert!(snapshot.is_empty());

        let snapshot = parse_snapshot_json_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }
}
