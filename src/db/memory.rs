use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemStore, StoreResult};
use crate::models::{Item, NewItem};

/// Process-local [`ItemStore`]. Used by tests and by `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Keyed by id, so iteration is in id order like the SQL backend.
    items: BTreeMap<i64, Item>,
    last_id: i64,
}

impl Inner {
    fn insert(&mut self, item: &NewItem) -> Item {
        self.last_id += 1;
        let stored = Item {
            id: self.last_id,
            name: item.name.clone(),
            price: item.price,
        };
        self.items.insert(stored.id, stored.clone());
        stored
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Item>> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().find(|i| i.name == name).cloned())
    }

    async fn save(&self, id: Option<i64>, item: &NewItem) -> StoreResult<Item> {
        let mut inner = self.inner.write().await;
        match id.and_then(|id| inner.items.get_mut(&id)) {
            Some(existing) => {
                existing.name.clone_from(&item.name);
                existing.price = item.price;
                Ok(existing.clone())
            }
            None => Ok(inner.insert(item)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.inner.write().await.items.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.inner.write().await.items.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, price: i32) -> NewItem {
        NewItem {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryItemStore::new();
        let a = store.save(None, &new_item("milk", 40)).await.unwrap();
        let b = store.save(None, &new_item("bread", 25)).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryItemStore::new();
        let a = store.save(None, &new_item("milk", 40)).await.unwrap();
        store.delete_all().await.unwrap();
        let b = store.save(None, &new_item("milk", 40)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() {
        let store = MemoryItemStore::new();
        let a = store.save(None, &new_item("milk", 40)).await.unwrap();
        let updated = store.save(Some(a.id), &new_item("oat milk", 55)).await.unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(store.find_by_id(a.id).await.unwrap(), Some(updated));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_with_vanished_id_inserts() {
        let store = MemoryItemStore::new();
        let saved = store.save(Some(404), &new_item("milk", 40)).await.unwrap();
        assert_ne!(saved.id, 404);
        assert_eq!(store.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_name_is_exact_and_prefers_lowest_id() {
        let store = MemoryItemStore::new();
        let first = store.save(None, &new_item("milk", 40)).await.unwrap();
        store.save(None, &new_item("milk", 45)).await.unwrap();
        assert_eq!(store.find_by_name("milk").await.unwrap(), Some(first));
        assert_eq!(store.find_by_name("Milk").await.unwrap(), None);
        assert_eq!(store.find_by_name("mil").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_id_is_ok() {
        let store = MemoryItemStore::new();
        store.delete_by_id(1).await.unwrap();
        store.delete_by_id(1).await.unwrap();
    }
}
