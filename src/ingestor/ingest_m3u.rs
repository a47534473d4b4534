//! Playlist retrieval
//!
//! Fetches a playlist document over HTTP and hands the body to the parser.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::errors::RetrievalError;
use crate::ingestor::m3u_parser::parse_m3u;
use crate::models::Channel;

/// Request timeout applied by [`M3uIngestor::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves remote M3U playlists and parses them into channel records.
///
/// Each retrieval is a single GET with no caching and no retry. Calls are
/// fully independent, so callers may run several concurrently; cancellation
/// and timeout policy beyond the client's own belong to the caller, via
/// [`M3uIngestor::with_client`].
pub struct M3uIngestor {
    client: Client,
}

impl M3uIngestor {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("m3u-ingest/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Use a caller-supplied HTTP client instead of the default one.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and parse the response body as an extended-M3U document.
    ///
    /// A non-success status or any transport failure surfaces as a
    /// [`RetrievalError`]; an empty channel list is a valid result, not an
    /// error.
    pub async fn fetch_and_parse(&self, url: &str) -> Result<Vec<Channel>, RetrievalError> {
        let url = Url::parse(url)?;

        debug!("Fetching playlist from {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::http_status(status));
        }

        let content = response.text().await?;
        let channels = parse_m3u(&content);

        info!("Fetched {} channels from {}", channels.len(), url);
        Ok(channels)
    }
}

impl Default for M3uIngestor {
    fn default() -> Self {
        Self::new()
    }
}
