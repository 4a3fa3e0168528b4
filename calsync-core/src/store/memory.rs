//! Non-persistent stand-in store.

use super::LocalStore;
use crate::error::SyncResult;
use crate::event::{Event, EventPatch};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory event store.
///
/// Records live behind a single `RwLock` so overlapping sync runs cannot
/// interleave partial writes on the record set.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn list_all(&self) -> SyncResult<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn create(&self, event: &Event) -> SyncResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut stored = event.clone();
        stored.id = Some(id.clone());
        self.events.write().await.push(stored);
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &EventPatch) -> SyncResult<bool> {
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
            Some(event) => {
                patch.apply(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> SyncResult<bool> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id.as_deref() != Some(id));
        Ok(events.len() < before)
    }

    async fn find_by_remote_id(&self, remote_id: &str) -> SyncResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .find(|e| e.remote_id.as_deref() == Some(remote_id))
            .cloned())
    }

    async fn attach_remote_id(&self, id: &str, remote_id: &str) -> SyncResult<bool> {
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
            Some(event) => {
                event.remote_id = Some(remote_id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_event(title: &str) -> Event {
        Event {
            id: None,
            remote_id: None,
            title: title.to_string(),
            description: String::new(),
            start: Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap()),
            category: "personal".to_string(),
            reminder: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_lists() {
        let store = MemoryStore::new();
        let id = store.create(&sample_event("Standup")).await.unwrap();

        let events = store.list_all().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id.as_deref(), Some(id.as_str()));
        assert_eq!(events[0].title, "Standup");
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let store = MemoryStore::new();
        let id = store.create(&sample_event("Standup")).await.unwrap();

        let patch = EventPatch {
            description: Some("Daily".to_string()),
            ..Default::default()
        };
        assert!(store.update(&id, &patch).await.unwrap());

        let events = store.list_all().await.unwrap();
        assert_eq!(events[0].description, "Daily");
        assert_eq!(events[0].title, "Standup");
    }

    #[tokio::test]
    async fn update_unknown_id_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.update("nope", &EventPatch::default()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryStore::new();
        let id = store.create(&sample_event("Standup")).await.unwrap();

        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn attach_and_find_by_remote_id() {
        let store = MemoryStore::new();
        let id = store.create(&sample_event("Standup")).await.unwrap();

        assert!(store.find_by_remote_id("g-1").await.unwrap().is_none());
        assert!(store.attach_remote_id(&id, "g-1").await.unwrap());

        let found = store.find_by_remote_id("g-1").await.unwrap().unwrap();
        assert_eq!(found.id.as_deref(), Some(id.as_str()));
        assert!(found.is_linked());
    }
}
