pub mod http;
pub mod provider;

use thiserror::Error;

pub use http::HttpSource;
pub use provider::LibrarySource;

/// Errors from the upstream library API. One attempt per call: no retry,
/// no partial results.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("upstream error: {0}")]
    Upstream(String),
}
