//! Test doubles for [`ItemStore`].

use async_trait::async_trait;

use super::{ItemStore, StoreError, StoreResult};
use crate::models::{Item, NewItem};

/// Every call fails as if the database were unreachable.
pub struct BrokenStore;

fn unreachable_db() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ItemStore for BrokenStore {
    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Err(unreachable_db())
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Item>> {
        Err(unreachable_db())
    }

    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Item>> {
        Err(unreachable_db())
    }

    async fn save(&self, _id: Option<i64>, _item: &NewItem) -> StoreResult<Item> {
        Err(unreachable_db())
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<()> {
        Err(unreachable_db())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        Err(unreachable_db())
    }
}
