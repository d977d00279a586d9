//! Trait abstractions for gist API operations.
//!
//! `GistApi` lets front ends depend on the gist operations rather than on a
//! concrete service, so they can be driven by mocks in tests.

use crate::service::GistService;
use crate::transport::Transport;
use crate::{Comment, Gist, Result};

/// Trait for gist API operations.
pub trait GistApi: Send + Sync {
    // === Gist Operations ===

    /// Get a gist by ID.
    fn get_gist(&self, id: &str) -> impl std::future::Future<Output = Result<Gist>> + Send;

    /// List a user's gists.
    fn list_gists(&self, user: &str)
    -> impl std::future::Future<Output = Result<Vec<Gist>>> + Send;

    /// Create a gist.
    fn create_gist(&self, gist: &Gist) -> impl std::future::Future<Output = Result<Gist>> + Send;

    /// Update a gist.
    fn update_gist(&self, gist: &Gist) -> impl std::future::Future<Output = Result<Gist>> + Send;

    // === Comment Operations ===

    /// Create a comment on a gist.
    fn create_comment(
        &self,
        gist_id: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<Comment>> + Send;

    /// List the comments on a gist.
    fn list_comments(
        &self,
        gist_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>>> + Send;
}

impl<T: Transport> GistApi for GistService<T> {
    async fn get_gist(&self, id: &str) -> Result<Gist> {
        self.get_gist(id).await
    }

    async fn list_gists(&self, user: &str) -> Result<Vec<Gist>> {
        self.list_gists(user).await
    }

    async fn create_gist(&self, gist: &Gist) -> Result<Gist> {
        self.create_gist(gist).await
    }

    async fn update_gist(&self, gist: &Gist) -> Result<Gist> {
        self.update_gist(gist).await
    }

    async fn create_comment(&self, gist_id: &str, body: &str) -> Result<Comment> {
        self.create_comment(gist_id, body).await
    }

    async fn list_comments(&self, gist_id: &str) -> Result<Vec<Comment>> {
        self.list_comments(gist_id).await
    }
}
