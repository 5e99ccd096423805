// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Feed client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered with a non-success status.
    #[error("unexpected status {status} for {url}")]
    Status {
        /// Status code returned by the host.
        status: reqwest::StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// The host did not report a `Last-Modified` header.
    #[error("missing Last-Modified header for {0}")]
    MissingLastModified(String),

    /// The `Last-Modified` header was not a valid RFC 2822 date.
    #[error("invalid Last-Modified header: {0}")]
    InvalidLastModified(#[source] jiff::Error),
}
