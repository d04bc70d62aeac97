use std::fmt;

use serde::Deserialize;

/// One requested line of an order. `name` is matched against `Item::name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderLine {
    pub name: String,
    /// Requested quantity. Stock is not tracked, so this is never checked.
    pub count: i32,
}

/// Body of `POST /api/grocery/order`. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    pub order: Vec<OrderLine>,
}

/// Names of a successfully placed order, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub items: Vec<String>,
}

impl fmt::Display for OrderConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order has been successfully placed for [{}]",
            self.items.join(", ")
        )
    }
}
