//! Auth commands - tokens, sessions and password reset

use anyhow::Result;
use infomark_client::InfomarkClient;

use super::require_token;
use crate::output::OutputContext;

/// Exchange credentials for an access/refresh token pair
pub async fn login(
    client: &InfomarkClient,
    email: &str,
    password: &str,
    ctx: &OutputContext,
) -> Result<()> {
    let tokens = client.auth().token(email, password).await?.into_result()?;

    ctx.print_kv(&[
        ("Access", tokens.access.token),
        ("Refresh", tokens.refresh.token),
    ]);
    Ok(())
}

/// Open a cookie session
pub async fn session(
    client: &InfomarkClient,
    email: &str,
    password: &str,
    ctx: &OutputContext,
) -> Result<()> {
    let login = client
        .auth()
        .create_session(email, password)
        .await?
        .into_result()?;

    ctx.print_kv(&[("Root", login.root.to_string())]);
    Ok(())
}

/// End the session of the given token
pub async fn logout(
    client: &InfomarkClient,
    token: Option<&str>,
    ctx: &OutputContext,
) -> Result<()> {
    let token = require_token(token)?;
    client.auth().delete_session(token).await?.into_result()?;

    ctx.success("Logged out");
    Ok(())
}

pub async fn reset_password(
    client: &InfomarkClient,
    email: &str,
    ctx: &OutputContext,
) -> Result<()> {
    client
        .auth()
        .request_password_reset(email)
        .await?
        .into_result()?;

    ctx.success(&format!("Password reset requested for {}", email));
    Ok(())
}
