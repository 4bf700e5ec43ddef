//! Order store: binds the [`Order`] aggregate to a [`StoreActor`].

mod actions;
mod entity;

pub use actions::*;

use crate::clients::OrderClient;
use crate::model::Order;
use crate::store::StoreActor;

/// Creates the order store and its client.
pub fn new(capacity: usize) -> (StoreActor<Order>, OrderClient) {
    let (actor, store) = StoreActor::new(capacity);
    (actor, OrderClient::new(store))
}
