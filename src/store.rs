use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::ContactRow;

/// Failure reading the contact directory. Every variant is recoverable by
/// retrying the fetch.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The directory could not be read at all.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The directory was read but its contents could not be parsed.
    #[error("malformed contacts file: {0}")]
    Malformed(String),
    /// Backend-specific failure, carrying its own text.
    #[error("{0}")]
    Unavailable(String),
}

/// Read-only view of the platform contact directory.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All rows, one per phone number, ordered by display name ascending.
    async fn query_all(&self) -> Result<Vec<ContactRow>, StoreError>;
}

/// Fixed in-memory rows. Stands in for the platform directory in tests and
/// in the demo when no contacts file is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<ContactRow>,
}

impl MemoryStore {
    pub fn new(rows: Vec<ContactRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn query_all(&self) -> Result<Vec<ContactRow>, StoreError> {
        Ok(self.rows.clone())
    }
}

/// Contact directory backed by a TOML file of `[[contacts]]` rows.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    contacts: Vec<ContactRow>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContactStore for FileStore {
    async fn query_all(&self) -> Result<Vec<ContactRow>, StoreError> {
        log::debug!("reading contacts from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        let file: DirectoryFile =
            toml::from_str(&text).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(file.contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_returns_rows() {
        let rows = vec![
            ContactRow::new("1", Some("Bea"), Some("555")),
            ContactRow::new("2", Some("Al"), None),
        ];
        let store = MemoryStore::new(rows.clone());
        assert_eq!(store.query_all().await.unwrap(), rows);
    }

    #[tokio::test]
    async fn test_file_store_reads_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.toml");
        std::fs::write(
            &path,
            r#"
[[contacts]]
id = "1"
display_name = "Bea"
phone_number = "555"

[[contacts]]
id = "2"
display_name = "Al"
"#,
        )
        .unwrap();

        let rows = FileStore::new(&path).query_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ContactRow::new("1", Some("Bea"), Some("555")));
        assert_eq!(rows[1].phone_number, None);
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileStore::new(dir.path().join("nope.toml"))
            .query_all()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();

        let err = FileStore::new(&path).query_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.toml");
        std::fs::write(&path, "").unwrap();

        assert!(FileStore::new(&path).query_all().await.unwrap().is_empty());
    }
}
