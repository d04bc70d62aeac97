//! Which roles may perform which operation.
//!
//! Every authorization decision in the service goes through [`authorize`], which
//! consults the single [`POLICY`] table below.

use std::fmt;

use super::identity::{Identity, Role};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListItems,
    GetItem,
    CreateItem,
    UpdateItem,
    DeleteItem,
    DeleteAllItems,
    PlaceOrder,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListItems => "list_items",
            Self::GetItem => "get_item",
            Self::CreateItem => "create_item",
            Self::UpdateItem => "update_item",
            Self::DeleteItem => "delete_item",
            Self::DeleteAllItems => "delete_all_items",
            Self::PlaceOrder => "place_order",
        };
        f.write_str(name)
    }
}

const READERS: &[Role] = &[Role::User, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];
const SHOPPERS: &[Role] = &[Role::User];

pub const POLICY: &[(Operation, &[Role])] = &[
    (Operation::ListItems, READERS),
    (Operation::GetItem, READERS),
    (Operation::CreateItem, ADMINS),
    (Operation::UpdateItem, ADMINS),
    (Operation::DeleteItem, ADMINS),
    (Operation::DeleteAllItems, ADMINS),
    (Operation::PlaceOrder, SHOPPERS),
];

/// Roles allowed to perform `operation`. Empty if the operation is not in the table.
pub fn required_roles(operation: Operation) -> &'static [Role] {
    POLICY
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

pub fn authorize(identity: &Identity, operation: Operation) -> AppResult<()> {
    if required_roles(operation).contains(&identity.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
