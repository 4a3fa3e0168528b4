//! Google Calendar remote store client for calsync.
//!
//! Implements the `RemoteCalendar` contract from calsync-core against the
//! Calendar v3 REST API, plus the session/token plumbing it needs.

pub mod api;
pub mod config;
pub mod convert;
pub mod session;
pub mod types;

pub use api::GoogleClient;
pub use session::Session;
