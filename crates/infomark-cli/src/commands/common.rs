//! Unauthenticated service information

use anyhow::Result;
use infomark_client::InfomarkClient;

use crate::output::OutputContext;

/// Check that the server answers
pub async fn ping(client: &InfomarkClient, ctx: &OutputContext) -> Result<()> {
    let body = client.common().ping().await?;
    ctx.success(body.trim());
    Ok(())
}

/// Show server version and commit
pub async fn version(client: &InfomarkClient, ctx: &OutputContext) -> Result<()> {
    let version = client.common().version().await?.into_result()?;

    ctx.print_kv(&[("Version", version.version), ("Commit", version.commit)]);
    Ok(())
}

pub async fn privacy(client: &InfomarkClient, ctx: &OutputContext) -> Result<()> {
    let statement = client.common().privacy_statement().await?.into_result()?;
    ctx.info(&statement.text);
    Ok(())
}
