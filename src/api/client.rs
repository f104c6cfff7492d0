//! equran.id v2 client.
//!
//! One unauthenticated GET to `{base_url}/surat`. The body is an envelope
//! `{ "data": [ ...chapters ] }`; only `data` is read.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::api::source::{ChapterSource, FetchError};
use crate::core::chapter::Chapter;

pub const DEFAULT_BASE_URL: &str = "https://equran.id/api/v2";

/// Longest slice of an error body kept in `FetchError::Api`.
const MAX_ERROR_BODY: usize = 200;

#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(default)]
    data: Option<Vec<Chapter>>,
}

/// Parse a response body into the chapter list.
///
/// An empty `data` array is a valid (empty) list. A missing or null `data`
/// is `MissingData`; anything that isn't the expected JSON shape is `Parse`.
pub fn parse_envelope(body: &str) -> Result<Vec<Chapter>, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    envelope.data.ok_or(FetchError::MissingData)
}

/// Turn a reqwest error into a message a reader of the screen can act on.
fn describe_reqwest_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "the request timed out".to_string()
    } else if error.is_connect() {
        "could not connect to the server".to_string()
    } else if error.is_decode() || error.is_body() {
        "could not read the response body".to_string()
    } else {
        error.to_string()
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

pub struct EquranClient {
    base_url: String,
    client: reqwest::Client,
}

impl EquranClient {
    /// `timeout` of `None` means the request may hang indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    pub fn list_url(&self) -> String {
        format!("{}/surat", self.base_url)
    }
}

impl Default for EquranClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait]
impl ChapterSource for EquranClient {
    fn name(&self) -> &str {
        "equran"
    }

    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, FetchError> {
        let url = self.list_url();
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(describe_reqwest_error(&e)))?;

        let status = response.status();
        debug!("Chapter list response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(describe_reqwest_error(&e)))?;
        debug!("Chapter list body: {} bytes", body.len());

        // Status is never checked on its own: a body with `data` is used as is
        match parse_envelope(&body) {
            Ok(chapters) => {
                info!("Parsed {} chapters", chapters.len());
                Ok(chapters)
            }
            Err(FetchError::Parse(_) | FetchError::MissingData) if !status.is_success() => {
                warn!("Chapter list request failed: HTTP {}", status.as_u16());
                Err(FetchError::Api {
                    status: status.as_u16(),
                    message: truncate_body(&body),
                })
            }
            Err(e) => Err(e),
        }
    }
}
