//! `gisty comments` command - list the comments on a gist.

use anyhow::Result;
use gisty_api::{Comment, GistApi};

use super::utils::AppContext;
use crate::output;

/// Fetch the comments on a gist.
pub async fn execute(api: &impl GistApi, gist_id: &str) -> Result<Vec<Comment>> {
    Ok(api.list_comments(gist_id).await?)
}

/// Run the comments command.
pub fn run(ctx: &AppContext, gist_id: &str) -> Result<()> {
    let service = ctx.service()?;
    let comments = ctx.block_on(execute(&service, gist_id))?;

    if ctx.json() {
        return output::json(&comments);
    }

    if comments.is_empty() {
        output::warn(&format!("Gist {gist_id} has no comments"));
        return Ok(());
    }

    for (i, comment) in comments.iter().enumerate() {
        if i > 0 {
            output::hr();
        }
        output::info(&output::comment_header(comment));
        for line in comment.body.as_deref().unwrap_or_default().lines() {
            output::detail(&format!("  {line}"));
        }
    }
    Ok(())
}
