//! Persistent local store: one JSON document per event.
//!
//! Each event is stored as `<id>.json` under the store directory, so the
//! filename doubles as the record id. Files that fail to parse are skipped
//! during listing rather than failing the whole scan.

use super::LocalStore;
use crate::error::{SyncError, SyncResult};
use crate::event::{Event, EventPatch};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> SyncResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SyncError::LocalStore(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(DirectoryStore { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn read_event(&self, path: &Path) -> SyncResult<Event> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            SyncError::LocalStore(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            SyncError::LocalStore(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    async fn write_event(&self, event: &Event) -> SyncResult<()> {
        let id = event
            .id
            .as_deref()
            .ok_or_else(|| SyncError::LocalStore("Cannot write event without an id".into()))?;
        let path = self.path_for(id);
        let contents = serde_json::to_string_pretty(event)
            .map_err(|e| SyncError::LocalStore(format!("Failed to serialize event: {e}")))?;
        tokio::fs::write(&path, contents).await.map_err(|e| {
            SyncError::LocalStore(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    async fn load(&self, id: &str) -> SyncResult<Option<Event>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        self.read_event(&path).await.map(Some)
    }
}

#[async_trait]
impl LocalStore for DirectoryStore {
    async fn list_all(&self) -> SyncResult<Vec<Event>> {
        let mut dir = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            SyncError::LocalStore(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut events = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            SyncError::LocalStore(format!("Failed to read {}: {}", self.dir.display(), e))
        })? {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match self.read_event(&path).await {
                    Ok(event) => events.push(event),
                    Err(e) => warn!("skipping unreadable event document: {e}"),
                }
            }
        }
        Ok(events)
    }

    async fn create(&self, event: &Event) -> SyncResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut stored = event.clone();
        stored.id = Some(id.clone());
        self.write_event(&stored).await?;
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &EventPatch) -> SyncResult<bool> {
        match self.load(id).await? {
            Some(mut event) => {
                patch.apply(&mut event);
                self.write_event(&event).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> SyncResult<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        tokio::fs::remove_file(&path).await.map_err(|e| {
            SyncError::LocalStore(format!("Failed to delete {}: {}", path.display(), e))
        })?;
        Ok(true)
    }

    async fn find_by_remote_id(&self, remote_id: &str) -> SyncResult<Option<Event>> {
        let events = self.list_all().await?;
        Ok(events
            .into_iter()
            .find(|e| e.remote_id.as_deref() == Some(remote_id)))
    }

    async fn attach_remote_id(&self, id: &str, remote_id: &str) -> SyncResult<bool> {
        match self.load(id).await? {
            Some(mut event) => {
                event.remote_id = Some(remote_id.to_string());
                self.write_event(&event).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
