//! Domain types: identifiers, the Order aggregate and cart rows.
//!
//! Nothing here knows about stores, channels or HTTP. The store bindings live
//! in [`order_actor`](crate::order_actor) and [`cart_actor`](crate::cart_actor).

mod cart_item;
mod error;
pub(crate) mod guard;
mod ids;
mod order;
mod order_item;

pub use cart_item::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use order_item::*;
