//! Resource path building for the gists API.
//!
//! Paths are relative to the API base URL and carry no suffix; the
//! transport appends its configured suffix when it builds the full URL.

use std::fmt;

/// Path segment for the gists collection.
pub const SEGMENT_GISTS: &str = "/gists";

/// Path segment for the users collection.
pub const SEGMENT_USERS: &str = "/users";

/// Path segment for comments under a gist.
pub const SEGMENT_COMMENTS: &str = "/comments";

/// Suffix used by the legacy JSON endpoints.
pub const SUFFIX_JSON: &str = ".json";

/// A gist API resource, identified by its kind and identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath<'a> {
    /// `/gists`
    Gists,
    /// `/gists/{id}`
    Gist(&'a str),
    /// `/users/{login}/gists`
    UserGists(&'a str),
    /// `/gists/{id}/comments`
    GistComments(&'a str),
}

impl ResourcePath<'_> {
    /// Render the path string.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Gists => SEGMENT_GISTS.to_string(),
            Self::Gist(id) => format!("{SEGMENT_GISTS}/{id}"),
            Self::UserGists(login) => format!("{SEGMENT_USERS}/{login}{SEGMENT_GISTS}"),
            Self::GistComments(id) => format!("{SEGMENT_GISTS}/{id}{SEGMENT_COMMENTS}"),
        }
    }
}

impl fmt::Display for ResourcePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
