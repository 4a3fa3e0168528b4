//! Canonical calendar event types.
//!
//! Both stores speak this representation: the remote client converts its
//! wire format into these types, and the local store persists them as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag applied to every event that arrives via import.
pub const IMPORTED_CATEGORY: &str = "imported";

/// A calendar event.
///
/// Identity is a pair of independent identifiers: `id` is assigned by the
/// local store on creation, `remote_id` by the remote calendar once the
/// event has been pushed or pulled. At most one local record may carry a
/// given remote id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Local-store document id (absent until the event is stored).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Remote calendar id, once linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Start instant. Absent when the remote side reports a date-only
    /// all-day event.
    pub start: Option<DateTime<Utc>>,
    /// End instant. Assumed >= start; validated upstream.
    pub end: Option<DateTime<Utc>>,
    /// Free-form category tag (imports always use [`IMPORTED_CATEGORY`]).
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reminder: bool,
}

impl Event {
    /// Whether this event has been linked to a remote record.
    pub fn is_linked(&self) -> bool {
        self.remote_id.is_some()
    }
}

/// Partial update for a stored event. Only supplied fields are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub reminder: Option<bool>,
}

impl EventPatch {
    /// Merge this patch into an existing record.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start) = self.start {
            event.start = Some(start);
        }
        if let Some(end) = self.end {
            event.end = Some(end);
        }
        if let Some(category) = &self.category {
            event.category = category.clone();
        }
        if let Some(reminder) = self.reminder {
            event.reminder = reminder;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn patch_only_overwrites_supplied_fields() {
        let mut event = Event {
            id: Some("local-1".to_string()),
            remote_id: None,
            title: "Dentist".to_string(),
            description: "Checkup".to_string(),
            start: Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap()),
            category: "personal".to_string(),
            reminder: false,
        };

        let patch = EventPatch {
            title: Some("Dentist (moved)".to_string()),
            reminder: Some(true),
            ..Default::default()
        };
        patch.apply(&mut event);

        assert_eq!(event.title, "Dentist (moved)");
        assert!(event.reminder);
        assert_eq!(event.description, "Checkup");
        assert_eq!(event.category, "personal");
        assert_eq!(
            event.start,
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap())
        );
    }
}
