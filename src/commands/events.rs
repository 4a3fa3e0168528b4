//! Local event management commands.

use anyhow::{Context, Result};
use calsync_core::Event;
use chrono::{DateTime, NaiveDateTime, Utc};

use super::open_store;
use crate::render;

pub async fn list() -> Result<()> {
    let store = open_store()?;
    let mut events = store.list_all().await?;
    events.sort_by_key(|e| e.start);

    if events.is_empty() {
        println!("No local events.");
        return Ok(());
    }
    for event in &events {
        println!("{}", render::render_event(event));
    }
    Ok(())
}

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub reminder: bool,
}

pub async fn add(args: AddArgs) -> Result<()> {
    let event = Event {
        id: None,
        remote_id: None,
        title: args.title,
        description: args.description.unwrap_or_default(),
        start: Some(parse_datetime(&args.start)?),
        end: Some(parse_datetime(&args.end)?),
        category: args.category.unwrap_or_else(|| "personal".to_string()),
        reminder: args.reminder,
    };

    let store = open_store()?;
    let id = store.create(&event).await?;
    println!("Created event {id}");
    Ok(())
}

pub async fn rm(id: &str) -> Result<()> {
    let store = open_store()?;

    if store.delete(id).await? {
        println!("Deleted event {id}");
    } else {
        println!("No event with id {id}");
    }
    Ok(())
}

/// Accepts RFC 3339 ("2025-03-20T15:00:00Z") or a local-naive short form
/// ("2025-03-20T15:00", interpreted as UTC).
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .with_context(|| format!("Could not parse date/time '{s}'"))?;
    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_both_datetime_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        assert_eq!(parse_datetime("2025-03-20T15:00:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2025-03-20T15:00").unwrap(), expected);
        assert!(parse_datetime("next tuesday").is_err());
    }
}
