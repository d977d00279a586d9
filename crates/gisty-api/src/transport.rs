//! HTTP transport for the GitHub API.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Auth;
use crate::error::{Error, Result};

/// Performs JSON requests against the API.
///
/// The response type is chosen by the caller, so a `Vec<T>` target decodes
/// a JSON array into elements of `T`. Implementations report network
/// failures, non-success statuses and malformed bodies as errors.
pub trait Transport: Send + Sync {
    /// Make a GET request.
    fn get<T>(&self, path: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;

    /// Make a POST request with a JSON body.
    fn post<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<T>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Make a PUT request with a JSON body.
    fn put<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<T>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

impl<R: Transport> Transport for Arc<R> {
    fn get<T>(&self, path: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        (**self).get(path)
    }

    fn post<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<T>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        (**self).post(path, body)
    }

    fn put<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<T>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        (**self).put(path, body)
    }
}

/// reqwest-backed [`Transport`] for api.github.com and GitHub Enterprise.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    /// Appended to every path, e.g. `.json` for legacy endpoints.
    path_suffix: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
}

impl HttpTransport {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a transport for the public GitHub API.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::builder(auth).build()
    }

    /// Create a transport with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        Self::builder(auth).base_url(base_url).build()
    }

    /// Start configuring a transport.
    #[must_use]
    pub fn builder(auth: &Auth) -> HttpTransportBuilder<'_> {
        HttpTransportBuilder {
            auth,
            base_url: Self::DEFAULT_API_URL.to_string(),
            path_suffix: String::new(),
            timeout: None,
        }
    }

    /// The API base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, path, self.path_suffix)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "sending request");
        self.client.request(method, self.url(path)).header(
            AUTHORIZATION,
            format!("Bearer {}", self.token.expose_secret()),
        )
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let status_code = status.as_u16();
        warn!(status = status_code, path, "request failed");

        match status_code {
            401 => Err(Error::AuthenticationFailed),
            404 => Err(Error::NotFound(path.to_string())),
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::ApiError {
                    status: status_code,
                    message: text,
                })
            }
        }
    }
}

impl Transport for HttpTransport {
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.request(Method::GET, path).send().await?;
        self.handle_response(path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(path, response).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        self.handle_response(path, response).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("path_suffix", &self.path_suffix)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder<'a> {
    auth: &'a Auth,
    base_url: String,
    path_suffix: String,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder<'_> {
    /// Set the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the suffix appended to every request path.
    #[must_use]
    pub fn path_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.path_suffix = suffix.into();
        self
    }

    /// Set a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the token and build the transport.
    ///
    /// # Errors
    /// Returns error if authentication fails or the HTTP client can't be built.
    pub fn build(self) -> Result<HttpTransport> {
        let token = self.auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gisty"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(HttpTransport {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            path_suffix: self.path_suffix,
            token,
        })
    }
}
