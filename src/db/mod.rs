//! Item persistence.
//!
//! [`ItemStore`] is the only interface the service layer sees. It exposes six
//! operations and nothing else: no transactions, no filters, no pagination.

mod memory;
mod postgres;
#[cfg(test)]
pub(crate) mod testutil;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, NewItem};

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every stored item, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Item>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Item>>;

    /// Exact name match. Names are not unique; the lowest id wins.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>>;

    /// Insert-or-update.
    ///
    /// With `id: None` a new row is inserted with a fresh id. With `Some(id)` the
    /// row is overwritten; if it no longer exists a new row is inserted instead.
    async fn save(&self, id: Option<i64>, item: &NewItem) -> StoreResult<Item>;

    /// Removes the item if present. A missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    async fn delete_all(&self) -> StoreResult<()>;
}
