//! The reconciliation engine.
//!
//! Every run is a full rescan of both stores: imports deduplicate through
//! the remote-id link, exports only push events that have never been
//! linked. There is no cursor, no retry, and no rollback; a failed item
//! is recorded in the report and the batch moves on.

use crate::error::{SyncError, SyncResult};
use crate::event::Event;
use crate::remote::{RemoteCalendar, RemoteEntry};
use crate::store::LocalStore;
use crate::sync::SyncReport;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::{debug, info, warn};

/// Orchestrates transfers between the remote calendar and the local store.
///
/// Holds no state of its own; both collaborators are injected at
/// construction so callers (and tests) control their lifetimes.
pub struct SyncEngine<'a> {
    remote: &'a dyn RemoteCalendar,
    local: &'a dyn LocalStore,
}

impl<'a> SyncEngine<'a> {
    pub fn new(remote: &'a dyn RemoteCalendar, local: &'a dyn LocalStore) -> Self {
        SyncEngine { remote, local }
    }

    /// First instant of the current month: the import window start.
    fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
        // Day 1 exists in every month, so this cannot be ambiguous.
        Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or(now)
    }

    /// Pull remote events into the local store.
    ///
    /// Events whose remote id is already linked locally are skipped, so
    /// re-running against an unchanged remote set writes nothing. A
    /// failure of the listing itself yields a failed report; per-item
    /// failures are recorded and processing continues.
    pub async fn import_from_remote(&self) -> SyncReport {
        let entries = match self.remote.list(Self::window_start(Utc::now())).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("remote listing failed: {e}");
                return SyncReport::failed(format!("Import failed: {e}"), e.to_string());
            }
        };

        let mut synced = 0;
        let mut errors = Vec::new();

        for RemoteEntry { title, converted } in entries {
            match self.import_one(converted).await {
                Ok(true) => {
                    debug!(%title, "event imported");
                    synced += 1;
                }
                Ok(false) => debug!(%title, "event already imported"),
                Err(e) => {
                    let msg = format!("Failed to process event '{title}': {e}");
                    warn!("{msg}");
                    errors.push(msg);
                }
            }
        }

        info!(events_synced = synced, errors = errors.len(), "import finished");
        SyncReport::completed(
            format!("Import completed. {synced} events imported."),
            synced,
            errors,
        )
    }

    /// Returns Ok(true) when a new local record was created, Ok(false)
    /// when the event was already linked.
    async fn import_one(&self, converted: SyncResult<Event>) -> SyncResult<bool> {
        let event = converted?;
        let remote_id = event
            .remote_id
            .clone()
            .ok_or_else(|| SyncError::Format("remote event has no id".into()))?;

        if self.local.find_by_remote_id(&remote_id).await?.is_some() {
            return Ok(false);
        }

        self.local.create(&event).await?;
        Ok(true)
    }

    /// Push local-only events to the remote calendar.
    ///
    /// Events that already carry a remote id are skipped unconditionally:
    /// export creates, it never updates previously linked records. A
    /// remote create that succeeds but whose link-back fails is not
    /// rolled back; the record stays unlinked and the failure is
    /// recorded.
    pub async fn export_to_remote(&self) -> SyncReport {
        let events = match self.local.list_all().await {
            Ok(events) => events,
            Err(e) => {
                warn!("local listing failed: {e}");
                return SyncReport::failed(format!("Export failed: {e}"), e.to_string());
            }
        };

        let mut synced = 0;
        let mut errors = Vec::new();

        for event in events {
            if event.is_linked() {
                continue;
            }

            match self.export_one(&event).await {
                Ok(()) => {
                    debug!(title = %event.title, "event exported");
                    synced += 1;
                }
                Err(e) => {
                    let msg = format!("Failed to export event '{}': {}", event.title, e);
                    warn!("{msg}");
                    errors.push(msg);
                }
            }
        }

        info!(events_synced = synced, errors = errors.len(), "export finished");
        SyncReport::completed(
            format!("Export completed. {synced} events exported."),
            synced,
            errors,
        )
    }

    async fn export_one(&self, event: &Event) -> SyncResult<()> {
        let remote_id = self.remote.create(event).await?;

        let id = event
            .id
            .as_deref()
            .ok_or_else(|| SyncError::LocalStore("stored event has no id".into()))?;
        if !self.local.attach_remote_id(id, &remote_id).await? {
            return Err(SyncError::LocalStore(format!(
                "could not link remote id onto record '{id}'"
            )));
        }
        Ok(())
    }

    /// Import, then export, unconditionally: the export runs even when
    /// the import reported failure. The combined report ANDs the success
    /// flags, sums the counters, and lists import errors first.
    pub async fn full_sync(&self) -> SyncReport {
        let import = self.import_from_remote().await;
        let export = self.export_to_remote().await;
        SyncReport::combine(import, export)
    }
}
