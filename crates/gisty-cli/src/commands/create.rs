//! `gisty create` command - create a gist from local files.

use std::path::PathBuf;

use anyhow::Result;
use gisty_api::{Gist, GistApi};

use super::utils::{AppContext, add_files};
use crate::output;

/// Options for a new gist.
#[derive(Debug)]
pub struct CreateOptions {
    pub files: Vec<PathBuf>,
    pub description: Option<String>,
    pub public: bool,
    pub user: Option<String>,
}

/// Build the creation payload from local files.
pub fn build_gist(options: &CreateOptions) -> Result<Gist> {
    let mut gist = Gist::new().public(options.public);
    if let Some(description) = &options.description {
        gist = gist.description(description);
    }
    if let Some(user) = &options.user {
        gist = gist.owner(user);
    }
    add_files(gist, &options.files)
}

/// Create a gist.
pub async fn execute(api: &impl GistApi, gist: &Gist) -> Result<Gist> {
    Ok(api.create_gist(gist).await?)
}

/// Run the create command.
pub fn run(ctx: &AppContext, options: &CreateOptions) -> Result<()> {
    let gist = build_gist(options)?;
    let service = ctx.service()?;
    let created = ctx.block_on(execute(&service, &gist))?;

    if ctx.json() {
        return output::json(&created);
    }

    output::success(&format!(
        "Created gist {}",
        created.id.as_deref().unwrap_or("?")
    ));
    if let Some(url) = &created.html_url {
        output::essential(url);
    }
    Ok(())
}
