// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use sqlx::SqlitePool;

const LAST_UPDATED_KEY: &str = "last_updated";

/// The persisted synchronization checkpoint.
///
/// A single timestamp, stored as unix milliseconds. It marks the newest feed
/// state the cache has been brought up to and gates future fetches.
#[derive(Debug, Clone)]
pub struct SyncState {
    pool: SqlitePool,
}

impl SyncState {
    pub async fn new(pool: SqlitePool) -> Result<Self, Box<dyn std::error::Error>> {
        Self::create_table(&pool)
            .await
            .map_err(|e| format!("Failed to create sync_state table: {e}"))?;

        Ok(Self { pool })
    }

    async fn create_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        const SQL: &str = "
CREATE TABLE IF NOT EXISTS sync_state (
    key   TEXT PRIMARY KEY,
    value INTEGER NOT NULL
);
";

        sqlx::query(SQL).execute(pool).await?;
        Ok(())
    }

    /// When the cache was last brought up to date. Epoch zero if never.
    pub async fn last_updated(&self) -> Result<Timestamp, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT value FROM sync_state WHERE key = ?;")
            .bind(LAST_UPDATED_KEY)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row
            // an out-of-range value is treated as never synced
            .and_then(|(millis,)| Timestamp::from_millisecond(millis).ok())
            .unwrap_or(Timestamp::UNIX_EPOCH))
    }

    /// Advances the checkpoint. Writes never move it backwards.
    pub async fn set_last_updated(&self, updated: Timestamp) -> Result<(), sqlx::Error> {
        const SQL: &str = "
INSERT INTO sync_state (key, value)
VALUES (?, ?)
ON CONFLICT(key) DO UPDATE SET
    value = MAX(value, excluded.value);
";

        sqlx::query(SQL)
            .bind(LAST_UPDATED_KEY)
            .bind(updated.as_millisecond())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localdb::LocalDb;

    async fn setup_test_db() -> LocalDb {
        LocalDb::open(None)
            .await
            .expect("Failed to create test database")
    }

    #[tokio::test]
    async fn last_updated_defaults_to_epoch_zero() {
        let db = setup_test_db().await;

        let last_updated = db.sync_state.last_updated().await.unwrap();
        assert_eq!(last_updated, Timestamp::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn set_last_updated_round_trips() {
        // Arrange
        let db = setup_test_db().await;
        let updated: Timestamp = "2024-05-01T12:00:00Z".parse().unwrap();

        // Act
        db.sync_state.set_last_updated(updated).await.unwrap();

        // Assert
        assert_eq!(db.sync_state.last_updated().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn set_last_updated_never_moves_backwards() {
        // Arrange
        let db = setup_test_db().await;
        let newer: Timestamp = "2024-05-02T00:00:00Z".parse().unwrap();
        let older: Timestamp = "2024-05-01T00:00:00Z".parse().unwrap();
        db.sync_state.set_last_updated(newer).await.unwrap();

        // Act
        db.sync_state.set_last_updated(older).await.unwrap();

        // Assert
        assert_eq!(db.sync_state.last_updated().await.unwrap(), newer);
    }
}
