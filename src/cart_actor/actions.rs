//! Filters for the cart store.

use crate::model::{CartItem, ItemId, UserId};

/// Selects cart rows inside the store.
#[derive(Debug, Clone)]
pub enum CartFilter {
    /// Every row in one user's cart.
    User(UserId),
    /// The user's row for one catalog item, if any.
    UserItem(UserId, ItemId),
    /// Exactly these rows, and only while they are unchanged since they were read.
    Rows(Vec<CartItem>),
}

impl CartFilter {
    pub fn matches(&self, item: &CartItem) -> bool {
        match self {
            CartFilter::User(user_id) => item.user_id() == user_id,
            CartFilter::UserItem(user_id, item_id) => {
                item.user_id() == user_id && item.item_id() == *item_id
            }
            CartFilter::Rows(rows) => rows.contains(item),
        }
    }
}
