//! REST client for the Google Calendar v3 events surface.

use crate::convert::{self, display_title};
use crate::session::Session;
use crate::types::{GoogleEvent, GoogleEventList};
use async_trait::async_trait;
use calsync_core::{Event, RemoteCalendar, RemoteEntry, SyncError, SyncResult};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";
/// Listing page cap (the provider's documented maximum).
const MAX_RESULTS: u32 = 250;

pub struct GoogleClient {
    http: reqwest::Client,
    session: Session,
    base_url: String,
    calendar_id: String,
}

impl GoogleClient {
    pub fn new(session: Session, calendar_id: impl Into<String>) -> Self {
        GoogleClient {
            http: reqwest::Client::new(),
            session,
            base_url: DEFAULT_BASE_URL.to_string(),
            calendar_id: calendar_id.into(),
        }
    }

    /// Point the client at a different API root (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn events_url(&self) -> String {
        format!("{}/calendars/{}/events", self.base_url, self.calendar_id)
    }

    fn event_url(&self, remote_id: &str) -> String {
        format!("{}/{}", self.events_url(), remote_id)
    }

    async fn fetch(&self, remote_id: &str) -> SyncResult<GoogleEvent> {
        let response = self
            .http
            .get(self.event_url(remote_id))
            .bearer_auth(self.session.access_token())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SyncError::RemoteRead(format!("Failed to fetch event {remote_id}: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| SyncError::RemoteRead(format!("Failed to parse event {remote_id}: {e}")))
    }
}

#[async_trait]
impl RemoteCalendar for GoogleClient {
    async fn list(&self, window_start: DateTime<Utc>) -> SyncResult<Vec<RemoteEntry>> {
        let response = self
            .http
            .get(self.events_url())
            .bearer_auth(self.session.access_token())
            .query(&[
                (
                    "timeMin",
                    window_start.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
                ("maxResults", MAX_RESULTS.to_string()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SyncError::RemoteRead(format!("Failed to list events: {e}")))?;

        let list: GoogleEventList = response
            .json()
            .await
            .map_err(|e| SyncError::RemoteRead(format!("Failed to parse event listing: {e}")))?;

        debug!(count = list.items.len(), "listed remote events");

        Ok(list
            .items
            .into_iter()
            .filter(|e| e.status != "cancelled" && !e.id.is_empty())
            .map(|e| RemoteEntry {
                title: display_title(&e),
                converted: convert::from_google(&e),
            })
            .collect())
    }

    async fn create(&self, event: &Event) -> SyncResult<String> {
        let body = convert::to_google(event)?;

        let response = self
            .http
            .post(self.events_url())
            .bearer_auth(self.session.access_token())
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                SyncError::RemoteWrite(format!("Failed to create event '{}': {}", event.title, e))
            })?;

        let created: GoogleEvent = response.json().await.map_err(|e| {
            SyncError::RemoteWrite(format!("Failed to parse created event: {e}"))
        })?;

        Ok(created.id)
    }

    async fn update(&self, remote_id: &str, event: &Event) -> bool {
        let converted = match convert::to_google(event) {
            Ok(converted) => converted,
            Err(e) => {
                warn!("cannot convert event for update: {e}");
                return false;
            }
        };

        // Fetch the current record, overwrite the converted fields, and
        // submit a full replacement.
        let mut current = match self.fetch(remote_id).await {
            Ok(current) => current,
            Err(e) => {
                warn!("{e}");
                return false;
            }
        };
        current.summary = converted.summary;
        current.description = converted.description;
        current.start = converted.start;
        current.end = converted.end;
        current.reminders = converted.reminders;

        let result = self
            .http
            .put(self.event_url(remote_id))
            .bearer_auth(self.session.access_token())
            .json(&current)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => true,
            Err(e) => {
                warn!("Failed to update remote event {remote_id}: {e}");
                false
            }
        }
    }

    async fn delete(&self, remote_id: &str) -> bool {
        let result = self
            .http
            .delete(self.event_url(remote_id))
            .bearer_auth(self.session.access_token())
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => true,
            Err(e) => {
                // Already-gone events count as deleted.
                let status = e.status();
                if status == Some(reqwest::StatusCode::GONE)
                    || status == Some(reqwest::StatusCode::NOT_FOUND)
                {
                    return true;
                }
                warn!("Failed to delete remote event {remote_id}: {e}");
                false
            }
        }
    }
}
