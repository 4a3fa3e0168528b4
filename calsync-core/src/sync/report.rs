//! Structured outcome of one reconciliation run.

use serde::{Deserialize, Serialize};

/// Result of a single import, export, or full-sync run.
///
/// Constructed fresh per invocation, returned to the caller, never
/// persisted. `success` reflects whether the run's bulk listing went
/// through; individual item failures land in `errors` without flipping
/// the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    pub events_synced: usize,
    pub errors: Vec<String>,
}

impl SyncReport {
    /// A run that completed its scan, possibly with per-item errors.
    pub fn completed(message: impl Into<String>, events_synced: usize, errors: Vec<String>) -> Self {
        SyncReport {
            success: true,
            message: message.into(),
            events_synced,
            errors,
        }
    }

    /// A run whose initial bulk listing failed outright.
    pub fn failed(message: impl Into<String>, error: impl Into<String>) -> Self {
        SyncReport {
            success: false,
            message: message.into(),
            events_synced: 0,
            errors: vec![error.into()],
        }
    }

    /// Combine an import run and an export run into one full-sync report.
    /// Import errors come first.
    pub fn combine(import: SyncReport, export: SyncReport) -> SyncReport {
        let events_synced = import.events_synced + export.events_synced;
        let mut errors = import.errors;
        errors.extend(export.errors);

        SyncReport {
            success: import.success && export.success,
            message: format!("Full sync completed. {events_synced} events processed."),
            events_synced,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_sums_counts_and_orders_errors() {
        let import = SyncReport::completed("import", 3, vec!["import error".to_string()]);
        let export = SyncReport::completed("export", 2, vec!["export error".to_string()]);

        let combined = SyncReport::combine(import, export);
        assert!(combined.success);
        assert_eq!(combined.events_synced, 5);
        assert_eq!(combined.errors, vec!["import error", "export error"]);
    }

    #[test]
    fn combine_fails_when_either_side_failed() {
        let import = SyncReport::failed("import failed", "listing error");
        let export = SyncReport::completed("export", 1, vec![]);

        let combined = SyncReport::combine(import, export);
        assert!(!combined.success);
        assert_eq!(combined.events_synced, 1);
        assert_eq!(combined.errors, vec!["listing error"]);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let report = SyncReport::completed("Import completed. 1 events imported.", 1, vec![]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["events_synced"], 1);
        assert!(json["errors"].as_array().unwrap().is_empty());
        assert!(json["message"].is_string());
    }
}
