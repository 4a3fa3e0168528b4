//! Remote calendar boundary.

use crate::error::SyncResult;
use crate::event::Event;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One entry from a remote listing.
///
/// Conversion into the canonical [`Event`] happens per item so that a
/// single malformed event cannot poison the whole batch. `title` is
/// whatever the provider reported, kept for error messages.
#[derive(Debug)]
pub struct RemoteEntry {
    pub title: String,
    pub converted: SyncResult<Event>,
}

/// CRUD surface of the remote calendar provider.
///
/// Implementations wrap provider errors into [`crate::SyncError`]: reads
/// as `RemoteRead`, writes as `RemoteWrite`. A provider failure during
/// `list` is an error, not an empty result: "no events" and "provider
/// unreachable" are distinct outcomes.
#[async_trait]
pub trait RemoteCalendar: Send + Sync {
    /// List events from `window_start` through the provider's default
    /// future horizon, recurring entries expanded into single concrete
    /// occurrences, ordered by start time ascending.
    async fn list(&self, window_start: DateTime<Utc>) -> SyncResult<Vec<RemoteEntry>>;

    /// Create an event remotely, returning the provider-assigned id.
    async fn create(&self, event: &Event) -> SyncResult<String>;

    /// Replace an existing remote event. Returns false on provider failure.
    async fn update(&self, remote_id: &str, event: &Event) -> bool;

    /// Delete a remote event. Returns false on provider failure.
    async fn delete(&self, remote_id: &str) -> bool;
}
