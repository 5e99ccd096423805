// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Feed client for the published JSON documents.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::fmt::rfc2822::DateTimeParser;
use reqwest::Method;
use reqwest::header::LAST_MODIFIED;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::http::HttpClient;

static RFC2822: DateTimeParser = DateTimeParser::new();

/// Client for the GuildEvents feed host.
///
/// # Example
///
/// ```ignore
/// use guildevents_feed::{FeedClient, FeedConfig};
///
/// # async fn example() -> Result<(), guildevents_feed::FeedError> {
/// let client = FeedClient::new(FeedConfig {
///     base_url: "https://feed.example.org".to_string(),
///     ..Default::default()
/// })?;
///
/// let modified = client.last_modified("events.json").await?;
/// let body = client.fetch("events.json").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Arc<HttpClient>,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Queries when a named feed object was last modified on the host.
    ///
    /// Issues a HEAD request, so the answer costs a handful of bytes no
    /// matter how large the object is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the host does not report a
    /// parseable `Last-Modified` header.
    pub async fn last_modified(&self, name: &str) -> Result<Timestamp, FeedError> {
        tracing::debug!(name, "querying feed object metadata");
        let resp = self
            .http
            .execute(self.http.build_request(Method::HEAD, name))
            .await?;

        let header = resp
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| FeedError::MissingLastModified(self.http.object_url(name)))?;

        RFC2822
            .parse_timestamp(header)
            .map_err(FeedError::InvalidLastModified)
    }

    /// Downloads the full body of a named feed object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn fetch(&self, name: &str) -> Result<String, FeedError> {
        tracing::debug!(name, "fetching feed object");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, name))
            .await?;

        Ok(resp.text().await?)
    }
}
