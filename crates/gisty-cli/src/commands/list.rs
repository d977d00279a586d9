//! `gisty list` command - list a user's gists.

use anyhow::Result;
use gisty_api::{Gist, GistApi};

use super::utils::AppContext;
use crate::output;

/// Fetch a user's gists.
pub async fn execute(api: &impl GistApi, user: &str) -> Result<Vec<Gist>> {
    Ok(api.list_gists(user).await?)
}

/// Run the list command.
pub fn run(ctx: &AppContext, user: &str) -> Result<()> {
    let service = ctx.service()?;
    let gists = ctx.block_on(execute(&service, user))?;

    if ctx.json() {
        return output::json(&gists);
    }

    if gists.is_empty() {
        output::warn(&format!("{user} has no gists"));
        return Ok(());
    }

    for gist in &gists {
        output::essential(&output::gist_line(gist));
    }
    Ok(())
}
