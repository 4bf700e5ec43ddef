//! # PlaceOrder
//!
//! validate → build the aggregate in memory → complete → persist once.
//!
//! A rejected order never reaches the order store: every check runs against
//! the in-memory [`Order`] before the single insert.

use crate::clients::OrderClient;
use crate::error::ShopError;
use crate::model::{DomainError, Order, OrderId, UserId};
use crate::use_cases::LineItem;
use serde::Deserialize;
use tracing::{info, instrument};

/// Input of [`PlaceOrderHandler`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderCommand {
    pub user_id: UserId,
    pub customer_address: String,
    pub shipping_option: String,
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Builds a completed order from `command` without touching any store.
pub fn build_order(command: PlaceOrderCommand) -> Result<Order, DomainError> {
    if command.items.is_empty() {
        return Err(DomainError::Validation(
            "Order must contain at least one item".to_string(),
        ));
    }

    let mut order = Order::new(
        command.user_id,
        command.customer_address,
        command.shipping_option,
        command.payment_method,
    )?;
    for line in command.items {
        order.add_item(line.item_id, line.item_name, line.quantity, line.unit_price)?;
    }
    order.complete()?;
    Ok(order)
}

/// Places orders submitted directly by the shopper.
#[derive(Clone)]
pub struct PlaceOrderHandler {
    orders: OrderClient,
}

impl PlaceOrderHandler {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    #[instrument(skip(self, command), fields(user_id = %command.user_id, lines = command.items.len()))]
    pub async fn handle(&self, command: PlaceOrderCommand) -> Result<OrderId, ShopError> {
        let order = build_order(command)?;
        let total = order.total_amount();
        let id = self.orders.add_order(order).await?;
        info!(%id, %total, "Order placed");
        Ok(id)
    }
}
