//! File system utilities used across the CLI.
//!
//! Thin wrappers over [`std::fs`] that attach path context to errors so
//! failures surface with the file they concern rather than a bare OS
//! message.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Create a directory and all missing parents.
///
/// Succeeds silently if the directory already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Create the parent directory of a file path if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Read a file's contents as a UTF-8 string.
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories as needed.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Read and deserialize a JSON file.
pub fn read_json_file<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = read_text_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Serialize a value as pretty-printed JSON and write it to a file.
///
/// The output ends with a trailing newline so the file diffs cleanly.
pub fn write_json_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize,
{
    let mut content = serde_json::to_string_pretty(data)
        .with_context(|| format!("Failed to serialize JSON for: {}", path.display()))?;
    content.push('\n');
    write_text_file(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_json_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sub").join("sample.json");
        let value = Sample { name: "button".to_string(), count: 3 };

        write_json_file(&path, &value).unwrap();
        let loaded: Sample = read_json_file(&path).unwrap();
        assert_eq!(loaded, value);

        let raw = read_text_file(&path).unwrap();
        assert!(raw.ends_with('\n'));
        assert!(raw.contains("  \"name\""));
    }

    #[test]
    fn test_read_json_file_reports_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_json_file::<Sample>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
