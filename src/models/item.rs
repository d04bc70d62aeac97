use serde::{Deserialize, Serialize};

/// A stored grocery item. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i32,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of create and update requests. An `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: i32,
}
