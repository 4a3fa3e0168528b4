//! Error types for calsync operations.

use thiserror::Error;

/// Errors that can occur while reconciling the two event stores.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No valid remote session. Fatal to the whole operation; never
    /// isolated per item.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A single event's date/time could not be parsed.
    #[error("Invalid event format: {0}")]
    Format(String),

    /// The remote provider failed while listing events.
    #[error("Remote read failed: {0}")]
    RemoteRead(String),

    /// The remote provider rejected a write.
    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    /// The local document store failed.
    #[error("Local store error: {0}")]
    LocalStore(String),
}

/// Result type alias for calsync operations.
pub type SyncResult<T> = Result<T, SyncError>;
