use crate::types::{GoogleEvent, GoogleEventTime};
use calsync_core::{Event, IMPORTED_CATEGORY, SyncError, SyncResult};
use chrono::{DateTime, Utc};

/// Title used when the remote summary is absent.
const UNTITLED: &str = "Untitled";

/// Title of a wire event for display and error messages.
pub fn display_title(event: &GoogleEvent) -> String {
    match &event.summary {
        Some(summary) if !summary.is_empty() => summary.clone(),
        _ => UNTITLED.to_string(),
    }
}

/// Map a Google wire event into the canonical representation.
///
/// A missing start/end yields an absent instant (all-day events use a
/// date-only field this engine does not interpret), while a malformed
/// `dateTime` is an error. The category is always retagged as imported
/// and the reminder flag is derived from override presence.
pub fn from_google(event: &GoogleEvent) -> SyncResult<Event> {
    let start = parse_instant(event.start.as_ref(), "start")?;
    let end = parse_instant(event.end.as_ref(), "end")?;

    let reminder = event
        .reminders
        .as_ref()
        .is_some_and(|r| !r.overrides.is_empty());

    Ok(Event {
        id: None,
        remote_id: (!event.id.is_empty()).then(|| event.id.clone()),
        title: display_title(event),
        description: event.description.clone(),
        start,
        end,
        category: IMPORTED_CATEGORY.to_string(),
        reminder,
    })
}

fn parse_instant(
    time: Option<&GoogleEventTime>,
    field: &str,
) -> SyncResult<Option<DateTime<Utc>>> {
    let Some(date_time) = time.and_then(|t| t.date_time.as_deref()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(date_time)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| SyncError::Format(format!("Invalid {field} time '{date_time}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::to_google;
    use crate::types::{GoogleReminderOverride, GoogleReminders};
    use chrono::TimeZone;

    fn wire_event() -> GoogleEvent {
        GoogleEvent {
            id: "g-1".to_string(),
            summary: Some("Team sync".to_string()),
            description: "Weekly".to_string(),
            start: Some(GoogleEventTime {
                date_time: Some("2025-03-20T15:00:00Z".to_string()),
                ..Default::default()
            }),
            end: Some(GoogleEventTime {
                date_time: Some("2025-03-20T16:00:00Z".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn maps_fields_and_retags_category() {
        let event = from_google(&wire_event()).unwrap();

        assert_eq!(event.title, "Team sync");
        assert_eq!(event.remote_id.as_deref(), Some("g-1"));
        assert_eq!(event.category, IMPORTED_CATEGORY);
        assert_eq!(
            event.start,
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap())
        );
        assert!(!event.reminder);
        assert!(event.id.is_none());
    }

    #[test]
    fn missing_summary_falls_back_to_untitled() {
        let mut wire = wire_event();
        wire.summary = None;

        let event = from_google(&wire).unwrap();
        assert_eq!(event.title, "Untitled");
    }

    #[test]
    fn reminder_derived_from_override_presence() {
        let mut wire = wire_event();
        wire.reminders = Some(GoogleReminders {
            use_default: false,
            overrides: vec![GoogleReminderOverride {
                method: "popup".to_string(),
                minutes: 10,
            }],
        });

        assert!(from_google(&wire).unwrap().reminder);

        wire.reminders = Some(GoogleReminders::default());
        assert!(!from_google(&wire).unwrap().reminder);
    }

    #[test]
    fn date_only_events_have_absent_instants() {
        let mut wire = wire_event();
        wire.start = Some(GoogleEventTime {
            date: Some("2025-03-20".to_string()),
            ..Default::default()
        });
        wire.end = Some(GoogleEventTime {
            date: Some("2025-03-21".to_string()),
            ..Default::default()
        });

        let event = from_google(&wire).unwrap();
        assert!(event.start.is_none());
        assert!(event.end.is_none());
    }

    #[test]
    fn malformed_date_time_is_a_format_error() {
        let mut wire = wire_event();
        wire.start = Some(GoogleEventTime {
            date_time: Some("not-a-date".to_string()),
            ..Default::default()
        });

        let err = from_google(&wire).unwrap_err();
        assert!(matches!(err, SyncError::Format(_)));
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn roundtrip_preserves_title_times_and_reminder() {
        let original = Event {
            id: Some("local-1".to_string()),
            remote_id: None,
            title: "Team sync".to_string(),
            description: "Weekly".to_string(),
            start: Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap()),
            category: "work".to_string(),
            reminder: true,
        };

        let back = from_google(&to_google(&original).unwrap()).unwrap();

        assert_eq!(back.title, original.title);
        assert_eq!(back.start, original.start);
        assert_eq!(back.end, original.end);
        assert_eq!(back.reminder, original.reminder);
        // Imports retag the category and drop local identity.
        assert_eq!(back.category, IMPORTED_CATEGORY);
        assert!(back.id.is_none());
    }
}
