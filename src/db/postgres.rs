use async_trait::async_trait;
use sqlx::PgPool;

use super::{ItemStore, StoreResult};
use crate::models::{Item, NewItem};

/// [`ItemStore`] backed by the `grocery` table.
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, item: &NewItem) -> StoreResult<Item> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO grocery (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(&item.name)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name, price FROM grocery ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>("SELECT id, name, price FROM grocery WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, price FROM grocery WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn save(&self, id: Option<i64>, item: &NewItem) -> StoreResult<Item> {
        let Some(id) = id else {
            return self.insert(item).await;
        };

        let updated = sqlx::query_as::<_, Item>(
            r#"
            UPDATE grocery
            SET name  = $1,
                price = $2
            WHERE id = $3
            RETURNING id, name, price
            "#,
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        // Deleted concurrently since the caller read it; store it again under a new id.
        match updated {
            Some(updated) => Ok(updated),
            None => self.insert(item).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM grocery WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM grocery").execute(&self.pool).await?;
        Ok(())
    }
}
