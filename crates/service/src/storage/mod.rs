//! Storage abstractions for the service layer
//!
//! The collection is persisted as one JSON array; implementations decide where
//! that array lives.

use async_trait::async_trait;

use crate::errors::StorageError;

pub mod json_array_store;

/// One schema-less expense entry.
pub type Record = serde_json::Value;

/// Whole-collection persistence. Every call is a full read or a full write.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn ensure_exists(&self) -> Result<(), StorageError>;
    async fn load_all(&self) -> Result<Vec<Record>, StorageError>;
    async fn save_all(&self, records: &[Record]) -> Result<(), StorageError>;
}
