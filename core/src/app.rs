// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use jiff::Timestamp;
use tokio::fs;
use tokio::sync::Mutex;

use guildevents_feed::FeedClient;

use crate::localdb::LocalDb;
use crate::sync::{SyncError, synchronize};
use crate::{Config, Event, Organisation};

const DB_NAME: &str = "guildevents.db";

/// GuildEvents application core.
///
/// Owns the local cache and the feed client, and runs at most one
/// synchronization pass at a time.
#[derive(Debug, Clone)]
pub struct GuildEvents {
    config: Config,
    db: LocalDb,
    feed: FeedClient,
    sync_guard: Arc<Mutex<()>>,
}

impl GuildEvents {
    /// Creates a new GuildEvents instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;

        let db_path = config.state_dir.as_ref().map(|dir| dir.join(DB_NAME));
        let db = LocalDb::open(db_path.as_deref())
            .await
            .map_err(|e| format!("Failed to initialize db: {e}"))?;

        let feed = FeedClient::new(config.feed())
            .map_err(|e| format!("Failed to create feed client: {e}"))?;

        Ok(Self {
            config,
            db,
            feed,
            sync_guard: Arc::new(Mutex::new(())),
        })
    }

    /// Brings the local cache up to date with the feed.
    ///
    /// Returns the new checkpoint when a pass completed, or `None` when the
    /// feed was unreachable, a document was bad, or another pass is already
    /// in flight. In every `None` case the cache keeps serving whatever it
    /// already holds and the next call retries from the same baseline.
    ///
    /// # Errors
    ///
    /// Returns an error only when the local store itself fails; network and
    /// decode problems are absorbed into the `Ok(None)` case.
    pub async fn refresh(&self) -> Result<Option<Timestamp>, Box<dyn Error>> {
        let Ok(_guard) = self.sync_guard.try_lock() else {
            tracing::debug!("synchronization already in flight, skipping");
            return Ok(None);
        };

        let last_updated = self.db.sync_state.last_updated().await?;
        tracing::debug!(%last_updated, feed = %self.config.feed_url, "starting synchronization pass");

        match synchronize(last_updated, &self.db, &self.feed).await {
            Ok(updated) => {
                self.db.sync_state.set_last_updated(updated).await?;
                tracing::info!(%updated, "event cache synchronized");
                Ok(Some(updated))
            }
            Err(err @ SyncError::Store { .. }) => Err(err.into()),
            Err(err) => {
                // offline or a bad document: keep the cached data and let the
                // next pass retry from the same checkpoint
                tracing::warn!(%err, "synchronization pass abandoned");
                Ok(None)
            }
        }
    }

    /// All cached events starting after now, soonest first.
    pub async fn upcoming_events(&self) -> Result<Vec<Event>, sqlx::Error> {
        self.db.events.upcoming().await
    }

    /// Upcoming events hosted by one organiser.
    pub async fn events_organised_by(&self, organiser_id: i64) -> Result<Vec<Event>, sqlx::Error> {
        self.db.events.organised_by(organiser_id).await
    }

    /// A single cached event.
    pub async fn get_event(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        self.db.events.get(id).await
    }

    /// All cached organisations, by name.
    pub async fn organisations(&self) -> Result<Vec<Organisation>, sqlx::Error> {
        self.db.organisations.all().await
    }

    /// Close the instance, saving any changes to the database.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = &config.state_dir {
        tracing::debug!(path = %dir.display(), "ensuring state directory exists");
        fs::create_dir_all(dir).await?;
    }
    Ok(())
}
