use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use super::{CollectionStore, Record};
use crate::errors::StorageError;

/// JSON file holding the whole collection as a top-level array.
///
/// No caching: every load reads the file and every save rewrites it
/// (pretty-printed, two-space indent). No atomic rename, so a failed write
/// can leave a truncated file behind.
#[derive(Clone, Debug)]
pub struct JsonArrayStore {
    file_path: PathBuf,
}

impl JsonArrayStore {
    /// Initialize the store from a path. Creates the file with `[]` if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StorageError> {
        let store = Self { file_path: path.into() };
        store.ensure_exists().await?;
        Ok(Arc::new(store))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl CollectionStore for JsonArrayStore {
    async fn ensure_exists(&self) -> Result<(), StorageError> {
        if fs::metadata(&self.file_path).await.is_ok() {
            return Ok(());
        }
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(StorageError::write)?;
        }
        self.save_all(&[]).await?;
        info!(path = %self.file_path.display(), "initialized empty data file");
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Record>, StorageError> {
        let bytes = fs::read(&self.file_path).await.map_err(StorageError::read)?;
        serde_json::from_slice(&bytes).map_err(StorageError::read)
    }

    async fn save_all(&self, records: &[Record]) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(records).map_err(StorageError::write)?;
        fs::write(&self.file_path, data).await.map_err(StorageError::write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("json_array_store_{}", uuid::Uuid::new_v4()))
            .join("nested")
            .join("gastos.json")
    }

    #[tokio::test]
    async fn new_creates_parent_dirs_and_empty_array() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::new(&tmp).await?;

        assert!(tmp.exists());
        assert_eq!(std::fs::read_to_string(&tmp)?, "[]");
        assert!(store.load_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn ensure_exists_leaves_existing_file_alone() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::new(&tmp).await?;
        store.save_all(&[json!({"monto": 5})]).await?;

        store.ensure_exists().await?;
        let reopened = JsonArrayStore::new(&tmp).await?;
        assert_eq!(reopened.load_all().await?, vec![json!({"monto": 5})]);
        Ok(())
    }

    #[tokio::test]
    async fn save_all_writes_pretty_json_in_order() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::new(&tmp).await?;
        let records = vec![json!({"a": 1}), json!(null), json!("texto"), json!([1, 2])];
        store.save_all(&records).await?;

        let raw = std::fs::read_to_string(&tmp)?;
        assert!(raw.starts_with("[\n  {\n    \"a\": 1\n  },"));
        assert_eq!(store.load_all().await?, records);
        Ok(())
    }

    #[tokio::test]
    async fn load_all_fails_on_missing_file() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::new(&tmp).await?;
        std::fs::remove_file(&tmp)?;

        assert!(matches!(store.load_all().await, Err(StorageError::Read(_))));
        Ok(())
    }

    #[tokio::test]
    async fn load_all_fails_on_garbage_or_non_array() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonArrayStore::new(&tmp).await?;

        std::fs::write(&tmp, "[{\"monto\": 1")?;
        assert!(matches!(store.load_all().await, Err(StorageError::Read(_))));

        std::fs::write(&tmp, "{\"monto\": 1}")?;
        assert!(matches!(store.load_all().await, Err(StorageError::Read(_))));
        Ok(())
    }

    #[tokio::test]
    async fn save_all_fails_when_path_is_a_directory() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_array_store_dir_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir)?;
        let store = JsonArrayStore { file_path: dir };

        assert!(matches!(store.save_all(&[]).await, Err(StorageError::Write(_))));
        Ok(())
    }
}
