//! `gisty update` command - change a gist's description or files.

use std::path::PathBuf;

use anyhow::{Result, bail};
use gisty_api::{Gist, GistApi};

use super::utils::{AppContext, add_files};
use crate::output;

/// Build the update payload, addressed by the gist ID.
pub fn build_update(id: &str, files: &[PathBuf], description: Option<&str>) -> Result<Gist> {
    if files.is_empty() && description.is_none() {
        bail!("Nothing to update - pass files or --description");
    }

    let mut gist = Gist::new().repo(id);
    if let Some(description) = description {
        gist = gist.description(description);
    }
    add_files(gist, files)
}

/// Update a gist.
pub async fn execute(api: &impl GistApi, gist: &Gist) -> Result<Gist> {
    Ok(api.update_gist(gist).await?)
}

/// Run the update command.
pub fn run(ctx: &AppContext, id: &str, files: &[PathBuf], description: Option<&str>) -> Result<()> {
    let gist = build_update(id, files, description)?;
    let service = ctx.service()?;
    let updated = ctx.block_on(execute(&service, &gist))?;

    if ctx.json() {
        return output::json(&updated);
    }

    output::success(&format!("Updated gist {id}"));
    for line in output::file_lines(&updated) {
        output::detail(&line);
    }
    Ok(())
}
