//! Conversion between canonical events and the Google wire format.

mod from_google;
mod to_google;

pub use from_google::{display_title, from_google};
pub use to_google::to_google;

/// Timezone identifier stamped on every event pushed to Google.
pub const EVENT_TIMEZONE: &str = "America/Mexico_City";
