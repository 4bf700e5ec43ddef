//! Cart store: binds [`CartItem`] rows to a [`StoreActor`].

mod actions;
mod entity;

pub use actions::*;

use crate::clients::CartClient;
use crate::model::CartItem;
use crate::store::StoreActor;

/// Creates the cart store and its client.
pub fn new(capacity: usize) -> (StoreActor<CartItem>, CartClient) {
    let (actor, store) = StoreActor::new(capacity);
    (actor, CartClient::new(store))
}
