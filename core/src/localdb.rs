// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

mod events;
mod organisations;
mod sync_state;

use std::error::Error;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::localdb::events::Events;
use crate::localdb::organisations::Organisations;
use crate::localdb::sync_state::SyncState;

/// The local cache of feed records, backed by SQLite.
///
/// Reads from the presentation side and writes from the sync side go through
/// the same pool; the per-call transactions in the repositories are all the
/// coordination the two sides need.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub organisations: Organisations,
    pub events: Events,
    pub sync_state: SyncState,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let options = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            SqliteConnectOptions::new().in_memory(true)
        }
        .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new();
        if filename.is_none() {
            // each pooled connection would otherwise open its own empty
            // in-memory database
            pool_options = pool_options.max_connections(1);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| format!("Failed to connect to SQLite database: {e}"))?;

        tracing::debug!("ensuring tables in the database");
        // organisation first: event carries a foreign key into it
        let organisations = Organisations::new(pool.clone()).await?;
        let events = Events::new(pool.clone()).await?;
        let sync_state = SyncState::new(pool.clone()).await?;
        Ok(LocalDb {
            pool,
            organisations,
            events,
            sync_state,
        })
    }

    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}
