//! # gisty-api
//!
//! Typed client for the GitHub gists API. [`GistService`] validates its
//! arguments, builds the resource path and hands the request to a
//! [`Transport`]; [`HttpTransport`] is the reqwest-backed implementation.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod auth;
mod error;
pub mod paths;
mod service;
mod traits;
mod transport;
mod types;

pub use auth::Auth;
pub use error::{Error, Result};
pub use paths::ResourcePath;
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use service::GistService;
pub use traits::GistApi;
pub use transport::{HttpTransport, HttpTransportBuilder, Transport};
pub use types::{Comment, CreateComment, Gist, GistFile, User};
