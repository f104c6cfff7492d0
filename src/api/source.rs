use std::fmt;

use async_trait::async_trait;

use crate::core::chapter::Chapter;

/// The single failure class of a list load: the request didn't produce a
/// usable `data` array. Variants only refine the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure (DNS, connection refused, timeout, body read).
    Network(String),
    /// Non-success status and no usable `data` in the body.
    Api { status: u16, message: String },
    /// Body is not JSON, or `data` is not an array of chapters.
    Parse(String),
    /// Valid JSON without a `data` field (or `data: null`).
    MissingData,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::MissingData => write!(f, "response has no data field"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch the full chapter list in API order.
    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, FetchError>;
}
