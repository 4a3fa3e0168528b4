//! Core types and reconciliation logic for calsync.
//!
//! This crate provides:
//! - `event`: the canonical event representation shared by both stores
//! - `store`: the local document store contract and its backends
//! - `remote`: the remote calendar contract
//! - `sync`: the reconciliation engine and its report type

pub mod error;
pub mod event;
pub mod remote;
pub mod store;
pub mod sync;

pub use error::{SyncError, SyncResult};
pub use event::{Event, EventPatch, IMPORTED_CATEGORY};
pub use remote::{RemoteCalendar, RemoteEntry};
pub use store::{DirectoryStore, LocalStore, MemoryStore, StoreBackend};
pub use sync::{SyncEngine, SyncReport};
