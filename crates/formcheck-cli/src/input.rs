//! Form capture for the CLI: `--field` arguments and submission files.

use anyhow::{bail, Context, Result};
use formcheck_core::FieldValue;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A captured submission and where it came from
pub struct Submission {
    pub source: String,
    pub fields: Vec<FieldValue>,
}

/// Parse `name=value` arguments, keeping argument order
pub fn fields_from_args(pairs: &[String]) -> Result<Vec<FieldValue>> {
    pairs
        .iter()
        .map(|pair| {
            FieldValue::parse_pair(pair)
                .with_context(|| format!("Invalid field '{}': expected name=value", pair))
        })
        .collect()
}

/// Load one submission file, or every submission file under a directory
pub fn load_path(path: &Path) -> Result<Vec<Submission>> {
    if path.is_file() {
        let fields = load_submission(path)?;
        return Ok(vec![Submission {
            source: path.display().to_string(),
            fields,
        }]);
    }

    if !path.is_dir() {
        bail!("Path not found: {}", path.display());
    }

    submission_files(path)
        .into_iter()
        .map(|file| -> Result<Submission> {
            let fields = load_submission(&file)?;
            Ok(Submission {
                source: file.display().to_string(),
                fields,
            })
        })
        .collect()
}

fn is_submission_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "json" || ext == "toml")
}

/// Recursively find `.json` and `.toml` files, sorted by name
fn submission_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_submission_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Read a single submission; fields keep document order
pub fn load_submission(path: &Path) -> Result<Vec<FieldValue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            fields_from_json(value)
        }
        Some("toml") => {
            let table: toml::Table = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            fields_from_toml(table)
        }
        _ => bail!("Unsupported submission file: {}", path.display()),
    }
}

/// Accepts `{"name": "value", ...}` or `[{"name": .., "value": ..}, ...]`
fn fields_from_json(value: serde_json::Value) -> Result<Vec<FieldValue>> {
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(name, v)| -> Result<FieldValue> {
                let text = json_text(&name, &v)?;
                Ok(FieldValue::new(name, text))
            })
            .collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| -> Result<FieldValue> {
                let name = item
                    .get("name")
                    .and_then(|n| n.as_str())
                    .context("Each field entry needs a string \"name\"")?;
                let value = match item.get("value") {
                    Some(v) => json_text(name, v)?,
                    None => String::new(),
                };
                Ok(FieldValue::new(name, value))
            })
            .collect(),
        _ => bail!("Submission must be a JSON object or array of fields"),
    }
}

/// Scalars become their text form; `null` reads as blank
fn json_text(name: &str, value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => bail!("Field '{}' must be a scalar value", name),
    }
}

fn fields_from_toml(table: toml::Table) -> Result<Vec<FieldValue>> {
    table
        .into_iter()
        .map(|(name, value)| -> Result<FieldValue> {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                _ => bail!("Field '{}' must be a scalar value", name),
            };
            Ok(FieldValue::new(name, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[FieldValue]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn args_keep_order() {
        let pairs = vec!["price=0".to_string(), "name=Ana".to_string()];
        let fields = fields_from_args(&pairs).unwrap();
        assert_eq!(names(&fields), ["price", "name"]);
    }

    #[test]
    fn args_reject_missing_equals() {
        let pairs = vec!["name".to_string()];
        assert!(fields_from_args(&pairs).is_err());
    }

    #[test]
    fn json_object_keeps_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"price": 10.5, "name": "Ana", "email": null}"#).unwrap();

        let fields = load_submission(&path).unwrap();
        assert_eq!(names(&fields), ["price", "name", "email"]);
        assert_eq!(fields[0].value, "10.5");
        assert_eq!(fields[2].value, "");
    }

    #[test]
    fn json_array_of_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(
            &path,
            r#"[{"name": "bank", "value": "001"}, {"name": "phone", "value": 11987654321}]"#,
        )
        .unwrap();

        let fields = load_submission(&path).unwrap();
        assert_eq!(fields[0], FieldValue::new("bank", "001"));
        assert_eq!(fields[1], FieldValue::new("phone", "11987654321"));
    }

    #[test]
    fn json_nested_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"name": {"first": "Ana"}}"#).unwrap();
        assert!(load_submission(&path).is_err());
    }

    #[test]
    fn toml_keeps_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.toml");
        fs::write(&path, "phone = \"123\"\naddress = \"Rua A, 123\"\nbank = 1\n").unwrap();

        let fields = load_submission(&path).unwrap();
        assert_eq!(names(&fields), ["phone", "address", "bank"]);
        assert_eq!(fields[2].value, "1");
    }

    #[test]
    fn directory_is_walked_for_submissions() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.json"), r#"{"email": "a@b.c"}"#).unwrap();
        fs::write(dir.path().join("a.toml"), "email = \"bad\"\n").unwrap();
        fs::write(dir.path().join("nested").join("c.json"), r#"{"bank": "1"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let submissions = load_path(dir.path()).unwrap();
        assert_eq!(submissions.len(), 3);
        assert!(submissions[0].source.ends_with("a.toml"));
        assert!(submissions[1].source.ends_with("b.json"));
        assert!(submissions[2].source.ends_with("c.json"));
    }
}
