// File store helpers.
// Atomic text writes for exports and optional JSON reads for configuration.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Write UTF-8 text to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a JSON file, returning None if it does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_text_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("shifts.csv");

        write_text(&path, "a,b\r\n1,2\r\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\r\n1,2\r\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_text_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shifts.csv");

        write_text(&path, "first").unwrap();
        write_text(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        write_text(&path, r#"{"name":"test","value":42}"#).unwrap();

        let data: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(
            data,
            Some(TestData {
                name: "test".to_string(),
                value: 42
            })
        );
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }
}
