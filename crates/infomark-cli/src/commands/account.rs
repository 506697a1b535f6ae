//! Enrollments command - exam enrollments of the authenticated user

use anyhow::Result;
use infomark_client::InfomarkClient;

use super::require_token;
use crate::output::{ExamEnrollmentRow, OutputContext};

/// List the exams the token's user is enrolled in
pub async fn enrollments(
    client: &InfomarkClient,
    token: Option<&str>,
    ctx: &OutputContext,
) -> Result<()> {
    let token = require_token(token)?;
    let enrollments = client
        .account()
        .exam_enrollments(token)
        .await?
        .into_result()?;

    let rows: Vec<ExamEnrollmentRow> = enrollments
        .into_iter()
        .map(|e| ExamEnrollmentRow {
            course_id: e.course_id,
            exam_id: e.exam_id,
            status: e.status,
            mark: if e.mark.is_empty() {
                "-".to_string()
            } else {
                e.mark
            },
        })
        .collect();

    ctx.print(&rows);
    Ok(())
}
