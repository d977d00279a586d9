use std::fs;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use gisty_api::{Auth, Gist, GistService, HttpTransport};
use tokio::runtime::Runtime;

use super::Cli;
use crate::config::Config;

/// Settings and runtime shared by the network commands.
pub struct AppContext {
    config: Config,
    api_url: Option<String>,
    json: bool,
    runtime: Runtime,
}

impl AppContext {
    /// Load configuration and start the async runtime.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Self {
            json: cli.json || config.output.json,
            api_url: cli.api_url.clone(),
            config,
            runtime,
        })
    }

    /// Whether results should be printed as JSON.
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Build an authenticated gist service.
    pub fn service(&self) -> Result<GistService<HttpTransport>> {
        let auth = Auth::auto();
        let github = &self.config.github;

        let mut builder = HttpTransport::builder(&auth);
        if let Some(url) = self.api_url.as_ref().or(github.api_url.as_ref()) {
            builder = builder.base_url(url.clone());
        }
        if let Some(suffix) = &github.path_suffix {
            builder = builder.path_suffix(suffix.clone());
        }
        if let Some(secs) = github.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let transport = builder.build().context("Failed to set up GitHub client")?;
        tracing::debug!(base_url = transport.base_url(), "using GitHub API");
        Ok(GistService::new(transport))
    }

    /// Run a future to completion on the context's runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Add local files to a gist payload, keyed by file name.
pub fn add_files(mut gist: Gist, files: &[impl AsRef<Path>]) -> Result<Gist> {
    for path in files {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        gist = gist.file(name, content);
    }
    Ok(gist)
}
