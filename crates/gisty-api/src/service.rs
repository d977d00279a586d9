//! Gist resource operations.

use tracing::debug;

use crate::error::{Error, Result};
use crate::paths::ResourcePath;
use crate::transport::Transport;
use crate::types::{Comment, CreateComment, Gist};

/// Service for fetching, listing, creating and updating gists and their
/// comments.
///
/// Arguments are validated before a path is built; a missing argument
/// returns [`Error::InvalidArgument`] without touching the transport.
/// Transport errors are returned as-is.
pub struct GistService<T> {
    transport: T,
}

impl<T: Transport> GistService<T> {
    /// Create a gist service on top of a transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a gist by ID.
    ///
    /// # Errors
    /// Returns error if `id` is empty or the request fails.
    pub async fn get_gist(&self, id: &str) -> Result<Gist> {
        let id = require(id, "gist id cannot be empty")?;
        let path = ResourcePath::Gist(id).to_path();
        debug!(%path, "fetching gist");
        self.transport.get(&path).await
    }

    /// List the gists of a user, in the order the API returns them.
    ///
    /// # Errors
    /// Returns error if `user` is empty or the request fails.
    pub async fn list_gists(&self, user: &str) -> Result<Vec<Gist>> {
        let user = require(user, "user cannot be empty")?;
        let path = ResourcePath::UserGists(user).to_path();
        debug!(%path, "listing gists");
        self.transport.get::<Vec<Gist>>(&path).await
    }

    /// Create a gist.
    ///
    /// Posts under the owning user when `gist.user` is set, otherwise to
    /// `/gists`.
    ///
    /// # Errors
    /// Returns error if the owning user has no login or the request fails.
    pub async fn create_gist(&self, gist: &Gist) -> Result<Gist> {
        let path = match &gist.user {
            Some(user) => {
                let login =
                    require_opt(user.login.as_deref(), "user login name cannot be empty")?;
                ResourcePath::UserGists(login).to_path()
            }
            None => ResourcePath::Gists.to_path(),
        };
        debug!(%path, files = gist.files.len(), "creating gist");
        self.transport.post(&path, gist).await
    }

    /// Update a gist, addressed by its repository identifier.
    ///
    /// # Errors
    /// Returns error if `gist.repo` is missing or the request fails.
    pub async fn update_gist(&self, gist: &Gist) -> Result<Gist> {
        let repo = require_opt(gist.repo.as_deref(), "repository cannot be empty")?;
        let path = ResourcePath::Gist(repo).to_path();
        debug!(%path, "updating gist");
        self.transport.put(&path, gist).await
    }

    /// Create a comment on a gist.
    ///
    /// # Errors
    /// Returns error if `gist_id` or `body` is empty or the request fails.
    pub async fn create_comment(&self, gist_id: &str, body: &str) -> Result<Comment> {
        let gist_id = require(gist_id, "gist id cannot be empty")?;
        let body = require(body, "gist comment cannot be empty")?;
        let path = ResourcePath::GistComments(gist_id).to_path();
        debug!(%path, "creating gist comment");
        let comment = CreateComment {
            body: body.to_string(),
        };
        self.transport.post(&path, &comment).await
    }

    /// List the comments on a gist.
    ///
    /// # Errors
    /// Returns error if `gist_id` is empty or the request fails.
    pub async fn list_comments(&self, gist_id: &str) -> Result<Vec<Comment>> {
        let gist_id = require(gist_id, "gist id cannot be empty")?;
        let path = ResourcePath::GistComments(gist_id).to_path();
        debug!(%path, "listing gist comments");
        self.transport.get::<Vec<Comment>>(&path).await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GistService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistService")
            .field("transport", &self.transport)
            .finish()
    }
}

fn require<'a>(value: &'a str, message: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::InvalidArgument(message))
    } else {
        Ok(value)
    }
}

fn require_opt<'a>(value: Option<&'a str>, message: &'static str) -> Result<&'a str> {
    require(value.unwrap_or_default(), message)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::*;
    use crate::types::User;

    /// A request seen by [`RecordingTransport`].
    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: &'static str,
        path: String,
        body: Option<serde_json::Value>,
    }

    /// Transport that records requests and replays queued responses.
    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<Recorded>>,
        responses: Mutex<VecDeque<Result<serde_json::Value>>>,
    }

    impl RecordingTransport {
        fn respond(self, value: serde_json::Value) -> Self {
            self.responses.lock().unwrap().push_back(Ok(value));
            self
        }

        fn fail(self, error: Error) -> Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }

        fn record<T: DeserializeOwned>(
            &self,
            method: &'static str,
            path: &str,
            body: Option<serde_json::Value>,
        ) -> Result<T> {
            self.requests.lock().unwrap().push(Recorded {
                method,
                path: path.to_string(),
                body,
            });
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(serde_json::Value::Null));
            Ok(serde_json::from_value(next?)?)
        }
    }

    impl Transport for RecordingTransport {
        async fn get<T>(&self, path: &str) -> Result<T>
        where
            T: DeserializeOwned + Send,
        {
            self.record("GET", path, None)
        }

        async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
        where
            B: Serialize + Sync,
            T: DeserializeOwned + Send,
        {
            self.record("POST", path, Some(serde_json::to_value(body)?))
        }

        async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
        where
            B: Serialize + Sync,
            T: DeserializeOwned + Send,
        {
            self.record("PUT", path, Some(serde_json::to_value(body)?))
        }
    }

    fn service(transport: RecordingTransport) -> GistService<RecordingTransport> {
        GistService::new(transport)
    }

    // === Precondition Tests ===

    #[tokio::test]
    async fn test_missing_arguments_issue_no_requests() {
        let svc = service(RecordingTransport::default());

        assert!(svc.get_gist("").await.unwrap_err().is_invalid_argument());
        assert!(svc.list_gists("").await.unwrap_err().is_invalid_argument());
        assert!(
            svc.create_gist(&Gist {
                user: Some(User::default()),
                ..Gist::default()
            })
            .await
            .unwrap_err()
            .is_invalid_argument()
        );
        assert!(
            svc.update_gist(&Gist::new())
                .await
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            svc.create_comment("", "hello")
                .await
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            svc.create_comment("7", "")
                .await
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(svc.list_comments("").await.unwrap_err().is_invalid_argument());

        assert!(svc.transport().requests().is_empty());
    }

    // === Gist Tests ===

    #[tokio::test]
    async fn test_get_gist() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!({
            "id": "42",
            "description": "hello"
        })));

        let gist = svc.get_gist("42").await.unwrap();

        assert_eq!(gist.id.as_deref(), Some("42"));
        assert_eq!(
            svc.transport().requests(),
            vec![Recorded {
                method: "GET",
                path: "/gists/42".into(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_list_gists_preserves_order() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!([
            { "id": "3" },
            { "id": "1" },
            { "id": "2" }
        ])));

        let gists = svc.list_gists("alice").await.unwrap();

        let ids: Vec<_> = gists.iter().filter_map(|g| g.id.as_deref()).collect();
        assert_eq!(ids, ["3", "1", "2"]);

        let requests = svc.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/users/alice/gists");
    }

    #[tokio::test]
    async fn test_create_gist_under_user() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!({
            "id": "new"
        })));
        let gist = Gist::new().owner("bob").file("a.txt", "hi");

        let created = svc.create_gist(&gist).await.unwrap();

        assert_eq!(created.id.as_deref(), Some("new"));
        let requests = svc.transport().requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/users/bob/gists");
        assert_eq!(
            requests[0].body.as_ref().unwrap()["files"]["a.txt"]["content"],
            "hi"
        );
    }

    #[tokio::test]
    async fn test_create_gist_anonymous() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!({
            "id": "anon"
        })));

        svc.create_gist(&Gist::new().description("d")).await.unwrap();

        let requests = svc.transport().requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/gists");
    }

    #[tokio::test]
    async fn test_update_gist() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!({
            "id": "abc123",
            "description": "updated"
        })));
        let gist = Gist::new().repo("abc123").description("updated");

        let updated = svc.update_gist(&gist).await.unwrap();

        assert_eq!(updated.description.as_deref(), Some("updated"));
        let requests = svc.transport().requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/gists/abc123");
    }

    // === Comment Tests ===

    #[tokio::test]
    async fn test_create_comment() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!({
            "id": 99,
            "body": "hello",
            "user": { "login": "alice" }
        })));

        let comment = svc.create_comment("7", "hello").await.unwrap();

        assert_eq!(comment.id, Some(99));
        assert_eq!(comment.body.as_deref(), Some("hello"));
        assert_eq!(
            svc.transport().requests(),
            vec![Recorded {
                method: "POST",
                path: "/gists/7/comments".into(),
                body: Some(serde_json::json!({ "body": "hello" })),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_comments() {
        let svc = service(RecordingTransport::default().respond(serde_json::json!([
            { "id": 1, "body": "first" },
            { "id": 2, "body": "second" }
        ])));

        let comments = svc.list_comments("7").await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].body.as_deref(), Some("first"));
        assert_eq!(comments[1].id, Some(2));
        assert_eq!(svc.transport().requests()[0].path, "/gists/7/comments");
    }

    // === Error Propagation Tests ===

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let svc = service(RecordingTransport::default().fail(Error::ApiError {
            status: 502,
            message: "Bad Gateway".into(),
        }));

        let err = svc.get_gist("42").await.unwrap_err();

        match err {
            Error::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_propagates_from_comment_list() {
        let svc = service(
            RecordingTransport::default().fail(Error::NotFound("/gists/7/comments".into())),
        );

        let err = svc.list_comments("7").await.unwrap_err();

        assert!(matches!(err, Error::NotFound(ref p) if p == "/gists/7/comments"));
    }

    #[tokio::test]
    async fn test_shared_transport_via_arc() {
        let transport = std::sync::Arc::new(
            RecordingTransport::default()
                .respond(serde_json::json!({ "id": "1" }))
                .respond(serde_json::json!({ "id": "2" })),
        );
        let first = GistService::new(std::sync::Arc::clone(&transport));
        let second = GistService::new(std::sync::Arc::clone(&transport));

        first.get_gist("1").await.unwrap();
        second.get_gist("2").await.unwrap();

        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, ["/gists/1", "/gists/2"]);
    }
}
