//! [`StoredEntity`] implementation for [`CartItem`].
//!
//! A user holds one row per catalog item. Upserts for a line the user already
//! has are merged into that row inside the store.

use super::actions::CartFilter;
use crate::model::{CartItem, CartItemId, CartItemUpdate, DomainError, NewCartItem};
use crate::store::StoredEntity;
use std::convert::Infallible;

impl StoredEntity for CartItem {
    type Id = CartItemId;
    type Create = NewCartItem;
    type Update = CartItemUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Filter = CartFilter;
    type Error = DomainError;

    fn from_create(id: CartItemId, params: NewCartItem) -> Result<Self, DomainError> {
        CartItem::new(id, params)
    }

    fn matches(&self, filter: &CartFilter) -> bool {
        filter.matches(self)
    }

    /// # Fields Updated
    /// - `quantity`: re-validated, must stay positive
    fn apply_update(&mut self, update: CartItemUpdate) -> Result<(), DomainError> {
        self.update_quantity(update.quantity)
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), DomainError> {
        match action {}
    }

    fn absorbs(&self, params: &NewCartItem) -> bool {
        self.same_line(params)
    }

    fn absorb(&mut self, params: NewCartItem) -> Result<(), DomainError> {
        self.merge(&params)
    }
}
