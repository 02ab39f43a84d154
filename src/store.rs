use crate::error::Error;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// The persisted slot: a single named location in durable storage holding
/// the serialized link collection.
///
/// Injected into the synchronizer rather than accessed as an ambient
/// global, so tests can substitute [`MemoryStore`] for the real file.
/// The synchronizer is the slot's only writer.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Read the slot. An absent slot is `Ok(None)` — never an error.
    async fn read(&self) -> Result<Option<String>, Error>;

    /// Overwrite the slot with `payload`.
    async fn write(&self, payload: &str) -> Result<(), Error>;
}

// ── File-backed store ──────────────────────────────────────────────────────

/// Persisted slot backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LinkStore for FileStore {
    async fn read(&self) -> Result<Option<String>, Error> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::PersistenceFailed(format!(
                "reading {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write(&self, payload: &str) -> Result<(), Error> {
        tokio::fs::write(&self.path, payload).await.map_err(|e| {
            Error::PersistenceFailed(format!("writing {}: {}", self.path.display(), e))
        })
    }
}

// ── In-memory store ────────────────────────────────────────────────────────

/// In-memory persisted slot. Used as the test double for [`FileStore`], and
/// usable directly when durability is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `payload`, as if written by an
    /// earlier session.
    pub fn seeded(payload: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(payload.into())),
        }
    }

    /// Current slot contents, for asserting on exactly what was persisted.
    pub async fn snapshot(&self) -> Option<String> {
        self.slot.read().await.clone()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn read(&self) -> Result<Option<String>, Error> {
        Ok(self.slot.read().await.clone())
    }

    async fn write(&self, payload: &str) -> Result<(), Error> {
        *self.slot.write().await = Some(payload.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let store = FileStore::new("/nonexistent/dir/shawty.json");
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_round_trips() {
        let path = std::env::temp_dir().join(format!("shawty-store-{}.json", std::process::id()));
        let store = FileStore::new(&path);

        store.write("[]").await.unwrap();
        assert_eq!(store.read().await.unwrap().as_deref(), Some("[]"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn memory_store_starts_empty_and_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.read().await.unwrap(), None);

        store.write("a").await.unwrap();
        store.write("b").await.unwrap();
        assert_eq!(store.snapshot().await.as_deref(), Some("b"));
    }
}
