//! Application use cases.
//!
//! Each handler validates its input, runs the domain logic in memory and only
//! then talks to the stores through the typed clients. Every handler returns
//! `Result<_, ShopError>`; nothing here panics on bad input.

mod cart;
mod checkout;
mod orders;
mod place_order;
mod view_cart;

pub use cart::*;
pub use checkout::*;
pub use orders::*;
pub use place_order::*;
pub use view_cart::*;

use crate::model::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item with the price and quantity the shopper asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}
