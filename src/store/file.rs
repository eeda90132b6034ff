//! Directory-backed store: one JSON file per game, plus two bookkeeping
//! files — `gameIds` (comma-joined index) and `currentGame` (id pointer).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{GameStore, StoreError};

const INDEX_FILE: &str = "gameIds";
const CURRENT_FILE: &str = "currentGame";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory when absent.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn payload_path(&self, game_id: &str) -> PathBuf {
        self.root.join(format!("{game_id}.json"))
    }

    async fn read_index(&self) -> Result<Vec<String>, StoreError> {
        match fs::read_to_string(self.root.join(INDEX_FILE)).await {
            Ok(joined) => Ok(joined
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_index(&self, ids: &[String]) -> Result<(), StoreError> {
        fs::write(self.root.join(INDEX_FILE), ids.join(",")).await?;
        Ok(())
    }
}

#[async_trait]
impl GameStore for FileStore {
    async fn save(&self, game_id: &str, payload: &str) -> Result<(), StoreError> {
        let mut ids = self.read_index().await?;
        if !ids.iter().any(|id| id == game_id) {
            ids.push(game_id.to_string());
            self.write_index(&ids).await?;
        }
        fs::write(self.payload_path(game_id), payload).await?;
        tracing::debug!(game_id, "file store: saved payload");
        Ok(())
    }

    async fn load(&self, game_id: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.payload_path(game_id)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, game_id: &str) -> Result<(), StoreError> {
        let ids: Vec<String> = self
            .read_index()
            .await?
            .into_iter()
            .filter(|id| id != game_id)
            .collect();
        self.write_index(&ids).await?;

        match fs::remove_file(self.payload_path(game_id)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        // A deleted game cannot stay current.
        if self.current_id().await?.as_deref() == Some(game_id) {
            self.set_current_id(None).await?;
        }
        tracing::debug!(game_id, "file store: deleted game");
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        self.read_index().await
    }

    async fn current_id(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.root.join(CURRENT_FILE)).await {
            Ok(id) => {
                let id = id.trim().to_string();
                Ok(if id.is_empty() { None } else { Some(id) })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_current_id(&self, game_id: Option<&str>) -> Result<(), StoreError> {
        let path = self.root.join(CURRENT_FILE);
        match game_id {
            Some(id) => fs::write(path, id).await?,
            None => match fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_open_creates_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested/games");
        let store = FileStore::open(&root).await.unwrap();
        assert_eq!(store.root(), root);
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (_dir, store) = temp_store().await;
        store.save("g1", "{\"a\":1}").await.unwrap();
        assert_eq!(store.load("g1").await.unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(store.load("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_is_last_write_wins() {
        let (_dir, store) = temp_store().await;
        store.save("g1", "first").await.unwrap();
        store.save("g1", "second").await.unwrap();
        assert_eq!(store.load("g1").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.list_ids().await.unwrap(), vec!["g1"]);
    }

    #[tokio::test]
    async fn test_index_tracks_saved_ids() {
        let (_dir, store) = temp_store().await;
        assert!(store.list_ids().await.unwrap().is_empty());
        store.save("g1", "x").await.unwrap();
        store.save("g2", "y").await.unwrap();
        assert_eq!(store.list_ids().await.unwrap(), vec!["g1", "g2"]);
    }

    #[tokio::test]
    async fn test_delete_removes_payload_and_index_entry() {
        let (_dir, store) = temp_store().await;
        store.save("g1", "x").await.unwrap();
        store.save("g2", "y").await.unwrap();
        store.delete("g1").await.unwrap();
        assert!(store.load("g1").await.unwrap().is_none());
        assert_eq!(store.list_ids().await.unwrap(), vec!["g2"]);
        // Deleting an unknown id is a no-op.
        store.delete("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_current_id_pointer() {
        let (_dir, store) = temp_store().await;
        assert!(store.current_id().await.unwrap().is_none());
        store.save("g1", "x").await.unwrap();
        store.set_current_id(Some("g1")).await.unwrap();
        assert_eq!(store.current_id().await.unwrap().as_deref(), Some("g1"));
        store.set_current_id(None).await.unwrap();
        assert!(store.current_id().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_clears_current_pointer() {
        let (_dir, store) = temp_store().await;
        store.save("g1", "x").await.unwrap();
        store.set_current_id(Some("g1")).await.unwrap();
        store.delete("g1").await.unwrap();
        assert!(store.current_id().await.unwrap().is_none());
    }
}
