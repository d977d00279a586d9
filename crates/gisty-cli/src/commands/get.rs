//! `gisty get` command - show a gist and its files.

use anyhow::Result;
use gisty_api::{Gist, GistApi};

use super::utils::AppContext;
use crate::output;

/// Fetch a gist.
pub async fn execute(api: &impl GistApi, id: &str) -> Result<Gist> {
    Ok(api.get_gist(id).await?)
}

/// Run the get command.
pub fn run(ctx: &AppContext, id: &str) -> Result<()> {
    let service = ctx.service()?;
    let gist = ctx.block_on(execute(&service, id))?;

    if ctx.json() {
        return output::json(&gist);
    }

    print_gist(&gist);
    Ok(())
}

fn print_gist(gist: &Gist) {
    output::info(&output::gist_line(gist));
    if let Some(url) = &gist.html_url {
        output::detail(url);
    }
    output::hr();
    for line in output::file_lines(gist) {
        output::detail(&line);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_mocks::MockGistApi;

    #[tokio::test]
    async fn test_execute_fetches_by_id() {
        let api = MockGistApi::new().with_gist(Gist {
            id: Some("42".into()),
            ..Gist::new().description("hello")
        });

        let gist = execute(&api, "42").await.unwrap();

        assert_eq!(gist.description.as_deref(), Some("hello"));
        assert_eq!(api.calls(), vec!["get_gist 42".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_reports_api_error() {
        let api = MockGistApi::new();

        let err = execute(&api, "missing").await.unwrap_err();

        assert!(err.to_string().contains("not found"));
    }
}
