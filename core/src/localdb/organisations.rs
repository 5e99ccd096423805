// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::Organisation;

#[derive(Debug, Clone)]
pub struct Organisations {
    pool: SqlitePool,
}

impl Organisations {
    pub async fn new(pool: SqlitePool) -> Result<Self, Box<dyn std::error::Error>> {
        Self::create_table(&pool)
            .await
            .map_err(|e| format!("Failed to create organisation table: {e}"))?;

        Ok(Self { pool })
    }

    async fn create_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        const SQL: &str = "
CREATE TABLE IF NOT EXISTS organisation (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
";

        sqlx::query(SQL).execute(pool).await?;
        Ok(())
    }

    /// Inserts or replaces organisations in one transaction.
    pub async fn insert_all(&self, organisations: &[Organisation]) -> Result<(), sqlx::Error> {
        const SQL: &str = "
INSERT INTO organisation (id, name)
VALUES (?, ?)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name;
";

        let mut tx = self.pool.begin().await?;
        for organisation in organisations {
            sqlx::query(SQL)
                .bind(organisation.id)
                .bind(&organisation.name)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn all(&self) -> Result<Vec<Organisation>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM organisation ORDER BY name ASC;")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Organisation>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM organisation WHERE id = ?;")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Removes an organisation; its events go with it via the cascade.
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM organisation WHERE id = ?;")
            .bind(id)
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

    fn organisation(id: i64, name: &str) -> Organisation {
        Organisation {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_all_inserts_new_organisations() {
        // Arrange
        let db = setup_test_db().await;

        // Act
        db.organisations
            .insert_all(&[organisation(1, "Chess Club"), organisation(2, "Film Society")])
            .await
            .expect("Failed to insert organisations");

        // Assert
        let all = db.organisations.all().await.unwrap();
        assert_eq!(all.len(), 2);
        let retrieved = db.organisations.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Chess Club");
    }

    #[tokio::test]
    async fn insert_all_replaces_existing_organisation() {
        // Arrange
        let db = setup_test_db().await;
        db.organisations
            .insert_all(&[organisation(1, "Chess Club")])
            .await
            .unwrap();

        // Act
        db.organisations
            .insert_all(&[organisation(1, "Chess and Draughts Club")])
            .await
            .unwrap();

        // Assert
        let all = db.organisations.all().await.unwrap();
        assert_eq!(all.len(), 1);
        let retrieved = db.organisations.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Chess and Draughts Club");
    }

    #[tokio::test]
    async fn all_orders_by_name() {
        // Arrange
        let db = setup_test_db().await;
        db.organisations
            .insert_all(&[
                organisation(5, "Film Society"),
                organisation(3, "Astronomy Society"),
                organisation(9, "Chess Club"),
            ])
            .await
            .unwrap();

        // Act
        let all = db.organisations.all().await.unwrap();

        // Assert
        let names: Vec<&str> = all.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Astronomy Society", "Chess Club", "Film Society"]
        );
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_id() {
        let db = setup_test_db().await;

        let retrieved = db.organisations.get(42).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn delete_cascades_to_events() {
        // Arrange
        let db = setup_test_db().await;
        db.organisations
            .insert_all(&[organisation(1, "Chess Club")])
            .await
            .unwrap();
        db.events
            .insert_all(&[crate::Event {
                id: 0,
                url: "https://x/e1".to_string(),
                organiser_id: 1,
                organiser_name: "Chess Club".to_string(),
                name: "Tournament".to_string(),
                from_date: "2099-05-01 18:00:00".to_string(),
                location: None,
                description: None,
            }])
            .await
            .unwrap();
        assert_eq!(db.events.upcoming().await.unwrap().len(), 1);

        // Act
        db.organisations.delete(1).await.unwrap();

        // Assert
        assert!(db.events.upcoming().await.unwrap().is_empty());
    }
}
