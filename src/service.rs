use std::sync::Arc;

use tracing::debug;

use crate::{
    db::ItemStore,
    error::{AppError, AppResult},
    models::{Item, NewItem, Order, OrderConfirmation},
};

/// Result of listing the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inventory {
    Empty,
    Stocked(Vec<Item>),
}

/// Grocery business rules over an [`ItemStore`]. Cheap to clone.
#[derive(Clone)]
pub struct GroceryService {
    store: Arc<dyn ItemStore>,
}

impl GroceryService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Inventory> {
        let items = self.store.find_all().await?;
        if items.is_empty() {
            Ok(Inventory::Empty)
        } else {
            Ok(Inventory::Stocked(items))
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<Item> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {id}")))
    }

    pub async fn create(&self, item: &NewItem) -> AppResult<Item> {
        Ok(self.store.save(None, item).await?)
    }

    /// Overwrites name and price of an existing item. No write happens for an unknown id.
    pub async fn update(&self, id: i64, item: &NewItem) -> AppResult<Item> {
        let existing = self.get(id).await?;
        Ok(self.store.save(Some(existing.id), item).await?)
    }

    /// Succeeds whether or not `id` exists.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Ok(self.store.delete_by_id(id).await?)
    }

    pub async fn delete_all(&self) -> AppResult<()> {
        Ok(self.store.delete_all().await?)
    }

    /// Checks that every ordered name exists in the inventory, in request order.
    ///
    /// Stops at the first missing name and reports it; later lines are never looked
    /// up. Nothing is reserved or decremented.
    pub async fn place_order(&self, order: &Order) -> AppResult<OrderConfirmation> {
        for line in &order.order {
            if self.store.find_by_name(&line.name).await?.is_none() {
                return Err(AppError::Unavailable(line.name.clone()));
            }
            debug!(name = %line.name, count = line.count, "Order line resolved");
        }

        Ok(OrderConfirmation {
            items: order.order.iter().map(|line| line.name.clone()).collect(),
        })
    }
}
