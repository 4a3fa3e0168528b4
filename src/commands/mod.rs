pub mod events;
pub mod export;
pub mod import;
pub mod sync;

use anyhow::Result;
use calsync_core::LocalStore;
use calsync_google::{GoogleClient, Session};

use crate::config;

/// Collaborators a sync run needs, built once per invocation and passed
/// into the engine explicitly.
pub(crate) struct SyncContext {
    pub local: Box<dyn LocalStore>,
    pub remote: GoogleClient,
}

pub(crate) async fn sync_context() -> Result<SyncContext> {
    let cfg = config::load_config()?;
    let local = cfg.store.backend().open()?;

    // No sync call runs without a valid session.
    let session = Session::load_valid().await?;
    let remote = GoogleClient::new(session, cfg.calendar_id.as_str());

    Ok(SyncContext { local, remote })
}

pub(crate) fn open_store() -> Result<Box<dyn LocalStore>> {
    let cfg = config::load_config()?;
    Ok(cfg.store.backend().open()?)
}
