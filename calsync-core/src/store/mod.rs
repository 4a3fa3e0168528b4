//! Local event storage.
//!
//! Two backends satisfy the same contract: a persistent directory of JSON
//! documents and a non-persistent in-memory stand-in. The backend is an
//! explicit startup-time choice, never a runtime fallback.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use crate::error::SyncResult;
use crate::event::{Event, EventPatch};
use async_trait::async_trait;
use std::path::PathBuf;

/// Which local store implementation to use, resolved once at startup.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// One JSON document per event under the given directory.
    Directory(PathBuf),
    /// In-memory stand-in; records do not survive the process.
    Memory,
}

impl StoreBackend {
    pub fn open(&self) -> SyncResult<Box<dyn LocalStore>> {
        match self {
            StoreBackend::Directory(dir) => Ok(Box::new(DirectoryStore::open(dir.clone())?)),
            StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        }
    }
}

/// CRUD surface of the local document store.
///
/// `Ok(false)` from the boolean operations means "no such record"; an
/// `Err` means the store itself failed.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn list_all(&self) -> SyncResult<Vec<Event>>;

    /// Store a new event, returning the assigned local id. Any id already
    /// on the event is ignored.
    async fn create(&self, event: &Event) -> SyncResult<String>;

    /// Merge-update: only fields supplied in the patch are overwritten.
    async fn update(&self, id: &str, patch: &EventPatch) -> SyncResult<bool>;

    async fn delete(&self, id: &str) -> SyncResult<bool>;

    /// Look up the record linked to a remote id, if any.
    async fn find_by_remote_id(&self, remote_id: &str) -> SyncResult<Option<Event>>;

    /// Write a remote id onto an existing record.
    async fn attach_remote_id(&self, id: &str, remote_id: &str) -> SyncResult<bool>;
}
