//! Bids command - group bids of a course

use anyhow::Result;
use infomark_client::InfomarkClient;

use super::require_token;
use crate::output::{BidRow, OutputContext};

pub async fn bids(
    client: &InfomarkClient,
    token: Option<&str>,
    course_id: i64,
    ctx: &OutputContext,
) -> Result<()> {
    let token = require_token(token)?;
    let bids = client
        .courses()
        .bids(token, course_id)
        .await?
        .into_result()?;

    let rows: Vec<BidRow> = bids
        .into_iter()
        .map(|b| BidRow {
            id: b.id,
            user_id: b.user_id,
            group_id: b.group_id,
            bid: b.bid.value(),
        })
        .collect();

    ctx.print(&rows);
    Ok(())
}
