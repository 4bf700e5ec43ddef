//! # Order queries and status commands

use crate::clients::OrderClient;
use crate::error::ShopError;
use crate::model::{DomainError, ItemId, Order, OrderId, OrderItem, OrderStatus, UserId};
use crate::order_actor::OrderAction;
use crate::store::Repository;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            item_id: item.item_id(),
            item_name: item.item_name().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            total_price: item.total_price(),
        }
    }
}

/// A stored order as shown to the shopper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    pub user_id: UserId,
    pub customer_address: String,
    pub shipping_option: String,
    pub payment_method: String,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            user_id: order.user_id().clone(),
            customer_address: order.customer_address().to_string(),
            shipping_option: order.shipping_option().to_string(),
            payment_method: order.payment_method().to_string(),
            status: order.status(),
            total_amount: order.total_amount(),
            placed_at: order.placed_at(),
            items: order.items().iter().map(OrderItemView::from).collect(),
        }
    }
}

/// Result of a status command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusView {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

/// Reads orders and moves them through their lifecycle.
#[derive(Clone)]
pub struct OrderHandler {
    orders: OrderClient,
}

impl OrderHandler {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<OrderView, ShopError> {
        let order = self
            .orders
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Order {id}")))?;
        Ok(OrderView::from(&order))
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderView>, ShopError> {
        let orders = self.orders.list_for_user(user_id).await?;
        Ok(orders.iter().map(OrderView::from).collect())
    }

    pub async fn cancel(&self, id: OrderId) -> Result<OrderStatusView, ShopError> {
        self.transition(id, OrderAction::Cancel).await
    }

    pub async fn ship(&self, id: OrderId) -> Result<OrderStatusView, ShopError> {
        self.transition(id, OrderAction::Ship).await
    }

    pub async fn deliver(&self, id: OrderId) -> Result<OrderStatusView, ShopError> {
        self.transition(id, OrderAction::Deliver).await
    }

    #[instrument(skip(self))]
    async fn transition(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderStatusView, ShopError> {
        let status = self.orders.apply(id, action).await?;
        info!(%id, %status, "Order status changed");
        Ok(OrderStatusView {
            order_id: id,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_actor;
    use crate::use_cases::{LineItem, PlaceOrderCommand, PlaceOrderHandler};
    use rust_decimal_macros::dec;

    fn setup() -> (OrderHandler, PlaceOrderHandler) {
        let (actor, client) = order_actor::new(8);
        tokio::spawn(actor.run());
        (
            OrderHandler::new(client.clone()),
            PlaceOrderHandler::new(client),
        )
    }

    fn command(user: &str) -> PlaceOrderCommand {
        PlaceOrderCommand {
            user_id: UserId::from(user),
            customer_address: "1 Main Street".to_string(),
            shipping_option: "Standard".to_string(),
            payment_method: "CreditCard".to_string(),
            items: vec![LineItem {
                item_id: ItemId(1),
                item_name: "Laptop".to_string(),
                unit_price: dec!(999.99),
                quantity: 1,
            }],
        }
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let (orders, place) = setup();
        let first = place.handle(command("testuser")).await.unwrap();
        place.handle(command("other")).await.unwrap();
        let third = place.handle(command("testuser")).await.unwrap();

        let view = orders.get(first).await.unwrap();
        assert_eq!(view.order_id, Some(first));
        assert_eq!(view.status, OrderStatus::Completed);
        assert_eq!(view.items[0].total_price, dec!(999.99));

        let mine = orders.list_for_user(UserId::from("testuser")).await.unwrap();
        let ids: Vec<_> = mine.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![Some(first), Some(third)]);

        let missing = orders.get(OrderId(99)).await;
        assert!(matches!(missing, Err(ShopError::Domain(DomainError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_status_commands() {
        let (orders, place) = setup();
        let id = place.handle(command("testuser")).await.unwrap();

        let refused = orders.cancel(id).await;
        assert!(matches!(refused, Err(ShopError::Domain(DomainError::InvalidState(_)))));

        assert_eq!(orders.ship(id).await.unwrap().status, OrderStatus::Shipped);
        assert_eq!(orders.deliver(id).await.unwrap().status, OrderStatus::Delivered);
        assert!(orders.deliver(id).await.is_err());

        let missing = orders.ship(OrderId(42)).await;
        assert!(matches!(missing, Err(ShopError::Domain(DomainError::NotFound(_)))));
    }
}
