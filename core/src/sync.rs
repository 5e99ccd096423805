// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Incremental synchronization of the local cache against the feed.
//!
//! Each feed resource is checked independently: its `Last-Modified`
//! timestamp is compared against the checkpoint of the last successful pass,
//! and only a stale resource is downloaded again. On a metered connection
//! that makes the common case (nothing changed) cost two HEAD requests.

use std::fmt;

use async_trait::async_trait;
use jiff::Timestamp;

use guildevents_feed::FeedClient;

use crate::localdb::LocalDb;
use crate::{Event, Organisation};

/// Error type produced by a [`RemoteSource`].
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// One of the JSON documents published on the feed host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Organisations,
    Events,
}

impl Resource {
    /// Name of the feed object backing this resource.
    pub fn object_name(self) -> &'static str {
        match self {
            Self::Organisations => "organisations.json",
            Self::Events => "events.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organisations => f.write_str("organisations"),
            Self::Events => f.write_str("events"),
        }
    }
}

/// Where the feed documents come from.
///
/// [`FeedClient`] is the real implementation; tests substitute their own.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// When the resource last changed on the remote host.
    async fn last_modified(&self, resource: Resource) -> Result<Timestamp, SourceError>;

    /// The resource's full JSON document.
    async fn fetch_body(&self, resource: Resource) -> Result<String, SourceError>;
}

#[async_trait]
impl RemoteSource for FeedClient {
    async fn last_modified(&self, resource: Resource) -> Result<Timestamp, SourceError> {
        Ok(FeedClient::last_modified(self, resource.object_name()).await?)
    }

    async fn fetch_body(&self, resource: Resource) -> Result<String, SourceError> {
        Ok(FeedClient::fetch(self, resource.object_name()).await?)
    }
}

/// Why a synchronization pass was abandoned.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The remote could not report when the resource last changed.
    #[error("{resource} metadata unavailable: {source}")]
    Unreachable {
        resource: Resource,
        #[source]
        source: SourceError,
    },

    /// Metadata arrived but the body download failed.
    #[error("failed to fetch {resource}: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: SourceError,
    },

    /// The body was not the JSON document we expect.
    #[error("failed to decode {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// The local store rejected the upsert.
    #[error("failed to store {resource}: {source}")]
    Store {
        resource: Resource,
        #[source]
        source: sqlx::Error,
    },
}

/// Runs one synchronization pass and returns the new checkpoint.
///
/// Organisations are fetched and persisted before events: events reference
/// organisation ids, and writing them first would trip the store's foreign
/// key. A failure at any step abandons the rest of the pass, but steps
/// already committed stay committed; partially-fresher data beats none, and
/// the fetch order keeps it referentially sound.
///
/// The returned checkpoint is the later of the two resources' remote
/// timestamps, recomputed even when nothing was stale, and never earlier
/// than `last_updated`.
///
/// # Errors
///
/// Returns a [`SyncError`] naming the step that failed. The caller is
/// expected to treat everything except [`SyncError::Store`] as "try again on
/// the next pass".
pub async fn synchronize(
    last_updated: Timestamp,
    db: &LocalDb,
    remote: &impl RemoteSource,
) -> Result<Timestamp, SyncError> {
    let resource = Resource::Organisations;
    let organisations_modified = remote
        .last_modified(resource)
        .await
        .map_err(|source| SyncError::Unreachable { resource, source })?;

    if last_updated < organisations_modified {
        let organisations: Vec<Organisation> = fetch_and_decode(resource, remote).await?;
        tracing::debug!(count = organisations.len(), "upserting organisations");
        db.organisations
            .insert_all(&organisations)
            .await
            .map_err(|source| SyncError::Store { resource, source })?;
    } else {
        tracing::debug!(%resource, "cache is fresh, skipping fetch");
    }

    // events go in strictly after organisations: they reference organisation
    // ids, and the store enforces that
    let resource = Resource::Events;
    let events_modified = remote
        .last_modified(resource)
        .await
        .map_err(|source| SyncError::Unreachable { resource, source })?;

    if last_updated < events_modified {
        let events: Vec<Event> = fetch_and_decode(resource, remote).await?;
        tracing::debug!(count = events.len(), "upserting events");
        db.events
            .insert_all(&events)
            .await
            .map_err(|source| SyncError::Store { resource, source })?;
    } else {
        tracing::debug!(%resource, "cache is fresh, skipping fetch");
    }

    Ok(last_updated
        .max(organisations_modified)
        .max(events_modified))
}

async fn fetch_and_decode<T: serde::de::DeserializeOwned>(
    resource: Resource,
    remote: &impl RemoteSource,
) -> Result<Vec<T>, SyncError> {
    let body = remote
        .fetch_body(resource)
        .await
        .map_err(|source| SyncError::Fetch { resource, source })?;

    serde_json::from_str(&body).map_err(|source| SyncError::Decode { resource, source })
}
