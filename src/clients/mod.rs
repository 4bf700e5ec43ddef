//! Type-safe wrappers around [`StoreClient`](crate::store::StoreClient).

mod cart_client;
mod order_client;

pub use cart_client::*;
pub use order_client::*;
