use std::sync::Arc;

use tokio::sync::Mutex;

use crate::errors::StorageError;
use crate::storage::{CollectionStore, Record};

/// Collection operations over a [`CollectionStore`].
///
/// Each operation holds `guard` for its full read-modify-write, so requests
/// served by this process never lose each other's updates. Other processes
/// writing the same file are not coordinated with.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn CollectionStore>,
    guard: Arc<Mutex<()>>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store, guard: Arc::new(Mutex::new(())) }
    }

    /// Full collection, in stored order.
    pub async fn list(&self) -> Result<Vec<Record>, StorageError> {
        let _guard = self.guard.lock().await;
        self.store.load_all().await
    }

    /// Append one record to the end and return it unchanged.
    pub async fn append(&self, record: Record) -> Result<Record, StorageError> {
        let _guard = self.guard.lock().await;
        let mut records = self.store.load_all().await?;
        records.push(record.clone());
        self.store.save_all(&records).await?;
        Ok(record)
    }

    /// Drop every record.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.guard.lock().await;
        self.store.save_all(&[]).await
    }

    /// Overwrite the collection without reading it; returns the stored count.
    pub async fn replace(&self, records: Vec<Record>) -> Result<usize, StorageError> {
        let _guard = self.guard.lock().await;
        self.store.save_all(&records).await?;
        Ok(records.len())
    }
}
