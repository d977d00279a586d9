//! `gisty comment` command - comment on a gist.

use anyhow::Result;
use gisty_api::{Comment, GistApi};

use super::utils::AppContext;
use crate::output;

/// Post a comment.
pub async fn execute(api: &impl GistApi, gist_id: &str, body: &str) -> Result<Comment> {
    Ok(api.create_comment(gist_id, body).await?)
}

/// Run the comment command.
pub fn run(ctx: &AppContext, gist_id: &str, body: &str) -> Result<()> {
    let service = ctx.service()?;
    let comment = ctx.block_on(execute(&service, gist_id, body))?;

    if ctx.json() {
        return output::json(&comment);
    }

    output::success(&format!("Commented on gist {gist_id}"));
    if let Some(url) = &comment.url {
        output::essential(url);
    }
    Ok(())
}
