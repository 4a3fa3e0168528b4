//! Bidirectional reconciliation between the two event stores.

mod engine;
mod report;

pub use engine::SyncEngine;
pub use report::SyncReport;
