// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Thin HTTP wrapper shared by the feed operations.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::FeedConfig;
use crate::error::FeedError;

/// HTTP client for feed requests.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: FeedConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request for a named feed object.
    pub fn build_request(&self, method: Method, name: &str) -> RequestBuilder {
        self.client.request(method, self.object_url(name))
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, FeedError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(FeedError::Status {
                status,
                url: resp.url().to_string(),
            })
        }
    }

    /// Full URL of a named feed object.
    pub fn object_url(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }
}
