// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::Event;

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub async fn new(pool: SqlitePool) -> Result<Self, Box<dyn std::error::Error>> {
        Self::create_table(&pool)
            .await
            .map_err(|e| format!("Failed to create event table: {e}"))?;

        Ok(Self { pool })
    }

    async fn create_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        const TABLE: &str = "
CREATE TABLE IF NOT EXISTS event (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    url            TEXT NOT NULL UNIQUE,
    organiser_id   INTEGER NOT NULL REFERENCES organisation (id) ON DELETE CASCADE,
    organiser_name TEXT NOT NULL,
    name           TEXT NOT NULL,
    from_date      TEXT NOT NULL,
    location       TEXT,
    description    TEXT
);
";
        const INDEX: &str = "
CREATE INDEX IF NOT EXISTS event_organiser_id ON event (organiser_id);
";

        sqlx::query(TABLE).execute(pool).await?;
        sqlx::query(INDEX).execute(pool).await?;
        Ok(())
    }

    /// Inserts or replaces events in one transaction.
    ///
    /// An event is keyed by its `url`; re-inserting the same url replaces the
    /// record wholesale but keeps the surrogate id it was first given.
    pub async fn insert_all(&self, events: &[Event]) -> Result<(), sqlx::Error> {
        const SQL: &str = "
INSERT INTO event (url, organiser_id, organiser_name, name, from_date, location, description)
VALUES (?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(url) DO UPDATE SET
    organiser_id   = excluded.organiser_id,
    organiser_name = excluded.organiser_name,
    name           = excluded.name,
    from_date      = excluded.from_date,
    location       = excluded.location,
    description    = excluded.description;
";

        let mut tx = self.pool.begin().await?;
        for event in events {
            sqlx::query(SQL)
                .bind(&event.url)
                .bind(event.organiser_id)
                .bind(&event.organiser_name)
                .bind(&event.name)
                .bind(&event.from_date)
                .bind(event.location.as_deref())
                .bind(event.description.as_deref())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    /// All events starting after the current time, soonest first.
    pub async fn upcoming(&self) -> Result<Vec<Event>, sqlx::Error> {
        const SQL: &str = "
SELECT id, url, organiser_id, organiser_name, name, from_date, location, description
FROM event
WHERE from_date > CURRENT_TIMESTAMP
ORDER BY from_date ASC;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Upcoming events hosted by one organiser.
    pub async fn organised_by(&self, organiser_id: i64) -> Result<Vec<Event>, sqlx::Error> {
        const SQL: &str = "
SELECT id, url, organiser_id, organiser_name, name, from_date, location, description
FROM event
WHERE organiser_id = ? AND from_date > CURRENT_TIMESTAMP
ORDER BY from_date ASC;
";

        sqlx::query_as(SQL)
            .bind(organiser_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        const SQL: &str = "
SELECT id, url, organiser_id, organiser_name, name, from_date, location, description
FROM event
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
