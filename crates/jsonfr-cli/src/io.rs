//! Reading documents and schemas, writing results.
//!
//! Files ending in `.yaml`/`.yml` are YAML; everything else is JSON.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use jsonfr_replace::SchemaNode;

use crate::is_yaml;

/// Read a JSON or YAML file into a value.
pub fn load_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&content).with_context(|| format!("parsing YAML: {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("parsing JSON: {}", path.display()))
    }
}

/// Read and parse a schema file.
pub fn load_schema(path: &Path) -> Result<SchemaNode> {
    let raw = load_value(path)?;
    SchemaNode::from_value(&raw).with_context(|| format!("invalid schema: {}", path.display()))
}

/// Serialize `value` in the format implied by `path` (JSON for stdout).
pub fn render_value(value: &Value, path: Option<&Path>, pretty: bool) -> Result<String> {
    let mut text = match path {
        Some(p) if is_yaml(p) => serde_yaml::to_string(value)?,
        _ if pretty => serde_json::to_string_pretty(value)?,
        _ => serde_json::to_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Write `value` to `path`, or to stdout when no path is given.
pub fn write_value(value: &Value, path: Option<&Path>, pretty: bool) -> Result<()> {
    let text = render_value(value, path, pretty)?;
    match path {
        Some(p) => std::fs::write(p, text).with_context(|| format!("writing {}", p.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("writing to stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("doc.json");
        let yaml_path = dir.path().join("doc.yml");
        std::fs::write(&json_path, r#"{"a": ["x", 1]}"#).unwrap();
        std::fs::write(&yaml_path, "a:\n  - x\n  - 1\n").unwrap();

        assert_eq!(load_value(&json_path).unwrap(), json!({"a": ["x", 1]}));
        assert_eq!(load_value(&yaml_path).unwrap(), json!({"a": ["x", 1]}));
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();
        let err = load_value(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn scalar_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "\"object\"").unwrap();
        let err = load_schema(&path).unwrap_err();
        assert!(format!("{err:#}").contains("schema root must be an object"));
    }

    #[test]
    fn renders_by_target_format() {
        let value = json!({"a": 1});
        assert_eq!(render_value(&value, None, false).unwrap(), "{\"a\":1}\n");
        assert!(render_value(&value, None, true).unwrap().contains("\n  \"a\": 1"));
        assert_eq!(
            render_value(&value, Some(Path::new("out.yaml")), true).unwrap(),
            "a: 1\n"
        );
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_value(&json!(["x"]), Some(&path), false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\"x\"]\n");
    }
}
