//! Terminal rendering for reports and events.

use anyhow::Result;
use calsync_core::{Event, SyncReport};
use owo_colors::OwoColorize;

/// Print a report either as the JSON wire shape or as a human summary.
///
/// The exit status stays 0 either way; callers inspect the `success`
/// field, not the transport.
pub fn print_report(report: &SyncReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let status = if report.success {
        "ok".green().to_string()
    } else {
        "failed".red().to_string()
    };
    println!("{} {}", status, report.message);

    for error in &report.errors {
        println!("   {} {}", "!".yellow(), error);
    }

    Ok(())
}

pub fn render_event(event: &Event) -> String {
    let id = event.id.as_deref().unwrap_or("-");
    let time = match event.start {
        Some(start) => start.format("%Y-%m-%d %H:%M").to_string(),
        None => "(all day)".to_string(),
    };
    let link = if event.is_linked() { "linked" } else { "local" };

    format!(
        "{}  {}  {}  {}",
        id.dimmed(),
        time,
        event.title,
        link.dimmed()
    )
}
