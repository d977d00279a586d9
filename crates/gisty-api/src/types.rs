//! Gist API types.
//!
//! Every field is optional: the API fills them in on responses, while
//! create and update payloads only carry what the caller set. Absent
//! fields are left out of serialized payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user, as referenced by gists and comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Numeric user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Public email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl User {
    /// Create a user reference from a login name.
    #[must_use]
    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..Self::default()
        }
    }
}

/// A single file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// File content. Responses may omit it for large files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// URL of the raw file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Detected language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GistFile {
    /// Create a file payload with the given content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// A GitHub gist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gist {
    /// Gist ID, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Owning user.
    #[serde(default, alias = "owner", skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Repository identifier of the gist, used to address updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Files keyed by file name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, GistFile>,

    /// Gist description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the gist is public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Gist URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    /// Git pull URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_pull_url: Option<String>,

    /// Git push URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_push_url: Option<String>,

    /// Number of comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,

    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gist {
    /// Create an empty gist payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Set the owning user by login.
    #[must_use]
    pub fn owner(mut self, login: impl Into<String>) -> Self {
        self.user = Some(User::with_login(login));
        self
    }

    /// Set the repository identifier.
    #[must_use]
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Add (or replace) a file.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .insert(name.into(), GistFile::with_content(content));
        self
    }
}

/// A comment on a gist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID.
    #[serde(default)]
    pub id: Option<u64>,

    /// Comment body.
    #[serde(default)]
    pub body: Option<String>,

    /// Comment author.
    #[serde(default)]
    pub user: Option<User>,

    /// API URL of the comment.
    #[serde(default)]
    pub url: Option<String>,

    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a gist comment.
#[derive(Debug, Serialize)]
pub struct CreateComment {
    /// Comment body.
    pub body: String,
}
