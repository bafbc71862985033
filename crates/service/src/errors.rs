use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file missing, unreadable, or not a JSON array.
    #[error("storage read error: {0}")]
    Read(String),
    /// Serialization or I/O failure while overwriting the backing file.
    #[error("storage write error: {0}")]
    Write(String),
}

impl StorageError {
    pub fn read(e: impl std::fmt::Display) -> Self { Self::Read(e.to_string()) }
    pub fn write(e: impl std::fmt::Display) -> Self { Self::Write(e.to_string()) }
}
