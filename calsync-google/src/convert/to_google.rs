use super::EVENT_TIMEZONE;
use crate::types::{GoogleEvent, GoogleEventTime, GoogleReminderOverride, GoogleReminders};
use calsync_core::{Event, SyncError, SyncResult};
use chrono::{DateTime, Utc};

/// Pre-event notices attached when an event's reminder flag is set:
/// a popup 30 minutes before and an email 60 minutes before.
const REMINDER_OVERRIDES: [(&str, i64); 2] = [("popup", 30), ("email", 60)];

/// Map a canonical event onto the Google wire format.
///
/// Pure transform; fails when the event has no start or end instant.
pub fn to_google(event: &Event) -> SyncResult<GoogleEvent> {
    let start = event
        .start
        .ok_or_else(|| SyncError::Format(format!("event '{}' has no start time", event.title)))?;
    let end = event
        .end
        .ok_or_else(|| SyncError::Format(format!("event '{}' has no end time", event.title)))?;

    let reminders = event.reminder.then(|| GoogleReminders {
        use_default: false,
        overrides: REMINDER_OVERRIDES
            .iter()
            .map(|(method, minutes)| GoogleReminderOverride {
                method: method.to_string(),
                minutes: *minutes,
            })
            .collect(),
    });

    Ok(GoogleEvent {
        summary: Some(event.title.clone()),
        description: event.description.clone(),
        start: Some(wire_time(start)),
        end: Some(wire_time(end)),
        reminders,
        ..Default::default()
    })
}

fn wire_time(instant: DateTime<Utc>) -> GoogleEventTime {
    GoogleEventTime {
        date_time: Some(instant.to_rfc3339()),
        date: None,
        time_zone: Some(EVENT_TIMEZONE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(reminder: bool) -> Event {
        Event {
            id: Some("local-1".to_string()),
            remote_id: None,
            title: "Team sync".to_string(),
            description: "Weekly".to_string(),
            start: Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap()),
            category: "work".to_string(),
            reminder,
        }
    }

    #[test]
    fn maps_fields_and_stamps_timezone() {
        let wire = to_google(&event(false)).unwrap();

        assert_eq!(wire.summary.as_deref(), Some("Team sync"));
        assert_eq!(wire.description, "Weekly");
        let start = wire.start.unwrap();
        assert_eq!(start.date_time.as_deref(), Some("2025-03-20T15:00:00+00:00"));
        assert_eq!(start.time_zone.as_deref(), Some(EVENT_TIMEZONE));
        assert!(wire.reminders.is_none());
    }

    #[test]
    fn reminder_flag_attaches_fixed_overrides() {
        let wire = to_google(&event(true)).unwrap();

        let reminders = wire.reminders.unwrap();
        assert!(!reminders.use_default);
        assert_eq!(reminders.overrides.len(), 2);
        assert_eq!(reminders.overrides[0].method, "popup");
        assert_eq!(reminders.overrides[0].minutes, 30);
        assert_eq!(reminders.overrides[1].method, "email");
        assert_eq!(reminders.overrides[1].minutes, 60);
    }

    #[test]
    fn missing_start_is_a_format_error() {
        let mut e = event(false);
        e.start = None;

        let err = to_google(&e).unwrap_err();
        assert!(matches!(err, SyncError::Format(_)));
    }
}
