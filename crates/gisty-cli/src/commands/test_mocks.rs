//! Mock implementation of `GistApi` for testing commands.

use std::sync::Mutex;

use gisty_api::{Comment, Error, Gist, GistApi, ResourcePath, Result};

/// In-memory `GistApi` that records each call.
pub struct MockGistApi {
    gists: Vec<Gist>,
    comments: Vec<Comment>,
    calls: Mutex<Vec<String>>,
}

impl MockGistApi {
    pub const fn new() -> Self {
        Self {
            gists: Vec::new(),
            comments: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gist(mut self, gist: Gist) -> Self {
        self.gists.push(gist);
        self
    }

    pub fn with_comment(mut self, body: &str) -> Self {
        self.comments.push(Comment {
            id: Some(self.comments.len() as u64 + 1),
            body: Some(body.to_string()),
            ..Comment::default()
        });
        self
    }

    /// Calls seen so far, as `"<method> <args>"`.
    #[allow(clippy::unwrap_used)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GistApi for MockGistApi {
    async fn get_gist(&self, id: &str) -> Result<Gist> {
        self.record(format!("get_gist {id}"));
        self.gists
            .iter()
            .find(|g| g.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| Error::NotFound(ResourcePath::Gist(id).to_path()))
    }

    async fn list_gists(&self, user: &str) -> Result<Vec<Gist>> {
        self.record(format!("list_gists {user}"));
        Ok(self.gists.clone())
    }

    async fn create_gist(&self, gist: &Gist) -> Result<Gist> {
        let owner = gist
            .user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or("-");
        self.record(format!("create_gist {owner}"));
        Ok(Gist {
            id: Some("created".into()),
            ..gist.clone()
        })
    }

    async fn update_gist(&self, gist: &Gist) -> Result<Gist> {
        self.record(format!(
            "update_gist {}",
            gist.repo.as_deref().unwrap_or_default()
        ));
        Ok(gist.clone())
    }

    async fn create_comment(&self, gist_id: &str, body: &str) -> Result<Comment> {
        self.record(format!("create_comment {gist_id} {body}"));
        Ok(Comment {
            id: Some(1),
            body: Some(body.to_string()),
            ..Comment::default()
        })
    }

    async fn list_comments(&self, gist_id: &str) -> Result<Vec<Comment>> {
        self.record(format!("list_comments {gist_id}"));
        Ok(self.comments.clone())
    }
}
