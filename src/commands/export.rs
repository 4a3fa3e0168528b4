use anyhow::Result;
use calsync_core::SyncEngine;

use super::sync_context;
use crate::render;

pub async fn run(json: bool) -> Result<()> {
    let ctx = sync_context().await?;
    let engine = SyncEngine::new(&ctx.remote, ctx.local.as_ref());

    let report = engine.export_to_remote().await;
    render::print_report(&report, json)
}
