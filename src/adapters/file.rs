use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::model::{json_kind, Locale};
use crate::domain::ports::{EntryAccessor, FieldStore};
use crate::utils::error::{EditorError, Result};

/// File-backed field store: the entry is one JSON object keyed by locale tag.
/// Reads re-open the file, so editors sharing a file observe each other's
/// committed writes on resync.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    locale: Locale,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            path: path.into(),
            locale,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The same entry file scoped to a different locale.
    pub fn for_locale(&self, locale: Locale) -> Self {
        Self {
            path: self.path.clone(),
            locale,
        }
    }

    fn read_entry(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        let parsed: Value = serde_json::from_str(&raw)?;
        match parsed {
            Value::Object(map) => Ok(map),
            other => Err(EditorError::MalformedFieldValue {
                reason: format!(
                    "entry file must hold a locale-keyed object, got {}",
                    json_kind(&other)
                ),
            }),
        }
    }

    fn write_entry(&self, entry: Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let rendered = serde_json::to_string_pretty(&Value::Object(entry))?;
        std::fs::write(&self.path, rendered)?;
        Ok(())
    }
}

impl FieldStore for JsonFileStore {
    async fn get_value(&self) -> Result<Option<Value>> {
        Ok(self.read_entry()?.get(self.locale.as_str()).cloned())
    }

    async fn set_value(&self, value: Value) -> Result<()> {
        let mut entry = self.read_entry()?;
        entry.insert(self.locale.as_str().to_string(), value);
        self.write_entry(entry)
    }

    fn locale(&self) -> Locale {
        self.locale.clone()
    }
}

impl EntryAccessor for JsonFileStore {
    async fn field_value_for(&self, locale: &Locale) -> Result<Option<Value>> {
        Ok(self.read_entry()?.get(locale.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("entry.json"), Locale::new("en-US"));
        assert_eq!(tokio_test::block_on(store.get_value()).unwrap(), None);
    }

    #[test]
    fn test_set_value_round_trips_per_locale() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("entry.json"), Locale::new("en-US"));
        let german = store.for_locale(Locale::new("de-DE"));

        tokio_test::block_on(store.set_value(json!([{"name": "Flour"}]))).unwrap();
        tokio_test::block_on(german.set_value(json!([{"name": "Mehl"}]))).unwrap();

        assert_eq!(
            tokio_test::block_on(store.get_value()).unwrap(),
            Some(json!([{"name": "Flour"}]))
        );
        assert_eq!(
            tokio_test::block_on(german.get_value()).unwrap(),
            Some(json!([{"name": "Mehl"}]))
        );
        assert_eq!(
            tokio_test::block_on(store.field_value_for(&Locale::new("de-DE"))).unwrap(),
            Some(json!([{"name": "Mehl"}]))
        );
    }

    #[tokio::test]
    async fn test_write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("entry.json");
        let store = JsonFileStore::new(&path, Locale::new("en-US"));

        store.set_value(json!([])).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_non_object_entry_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entry.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonFileStore::new(&path, Locale::new("en-US"));

        let result = store.get_value().await;
        assert!(matches!(
            result.err().unwrap(),
            EditorError::MalformedFieldValue { .. }
        ));
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entry.json");
        std::fs::write(&path, "").unwrap();
        let store = JsonFileStore::new(&path, Locale::new("en-US"));

        assert_eq!(store.get_value().await.unwrap(), None);
    }
}
