//! # CheckoutCart
//!
//! Turns a user's cart into a placed order, then removes the ordered rows. The
//! rows are removed only after the order has been stored, and only if they
//! still match what was ordered: items added or topped up meanwhile stay in
//! the cart.

use crate::clients::{CartClient, OrderClient};
use crate::error::ShopError;
use crate::model::{CartItem, OrderId, UserId};
use crate::use_cases::{build_order, LineItem, PlaceOrderCommand};
use serde::Deserialize;
use tracing::{info, instrument};

/// Delivery and payment details supplied at checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDetails {
    pub customer_address: String,
    pub shipping_option: String,
    pub payment_method: String,
}

impl From<&CartItem> for LineItem {
    fn from(item: &CartItem) -> Self {
        Self {
            item_id: item.item_id(),
            item_name: item.item_name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
        }
    }
}

#[derive(Clone)]
pub struct CheckoutCartHandler {
    carts: CartClient,
    orders: OrderClient,
}

impl CheckoutCartHandler {
    pub fn new(carts: CartClient, orders: OrderClient) -> Self {
        Self { carts, orders }
    }

    #[instrument(skip(self, details))]
    pub async fn handle(
        &self,
        user_id: UserId,
        details: CheckoutDetails,
    ) -> Result<OrderId, ShopError> {
        let rows = self.carts.list_for_user(user_id.clone()).await?;
        let order = build_order(PlaceOrderCommand {
            user_id: user_id.clone(),
            customer_address: details.customer_address,
            shipping_option: details.shipping_option,
            payment_method: details.payment_method,
            items: rows.iter().map(LineItem::from).collect(),
        })?;

        let id = self.orders.add_order(order).await?;
        let cleared = self.carts.remove_rows(rows).await?;
        info!(%id, cleared, "Cart checked out");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor;
    use crate::model::{CartItemId, DomainError, ItemId, NewCartItem, Order};
    use crate::store::mock::MockStore;
    use crate::store::{StoreClient, StoreError, StoreRequest};
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            customer_address: "1 Main Street".to_string(),
            shipping_option: "Express".to_string(),
            payment_method: "PayPal".to_string(),
        }
    }

    fn row() -> CartItem {
        CartItem::new(
            CartItemId(1),
            NewCartItem {
                user_id: UserId::from("testuser"),
                item_id: ItemId(1),
                item_name: "Laptop".to_string(),
                unit_price: dec!(999.99),
                quantity: 1,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_cart_leaves_storage_untouched() {
        let mut carts = MockStore::<CartItem>::new();
        carts.expect_list().return_ok(Vec::new());
        let orders = MockStore::<Order>::new();
        let handler = CheckoutCartHandler::new(
            CartClient::new(carts.client()),
            OrderClient::new(orders.client()),
        );

        let result = handler.handle(UserId::from("testuser"), details()).await;

        assert!(matches!(result, Err(ShopError::Domain(DomainError::Validation(_)))));
        assert_eq!(carts.received(), vec!["List"]);
        assert!(orders.received().is_empty());
        carts.verify();
    }

    #[tokio::test]
    async fn test_cart_is_kept_when_order_cannot_be_stored() {
        let mut carts = MockStore::<CartItem>::new();
        carts.expect_list().return_ok(vec![row()]);
        let mut orders = MockStore::<Order>::new();
        orders.expect_create().return_err(StoreError::Closed);
        let handler = CheckoutCartHandler::new(
            CartClient::new(carts.client()),
            OrderClient::new(orders.client()),
        );

        let result = handler.handle(UserId::from("testuser"), details()).await;

        assert!(matches!(result, Err(ShopError::Unavailable(_))));
        assert_eq!(carts.received(), vec!["List"]);
        carts.verify();
        orders.verify();
    }

    #[tokio::test]
    async fn test_cart_is_cleared_after_order_is_stored() {
        let mut carts = MockStore::<CartItem>::new();
        carts.expect_list().return_ok(vec![row()]);
        carts.expect_delete_matching().return_ok(1);
        let mut orders = MockStore::<Order>::new();
        orders.expect_create().return_ok(OrderId(4));
        let handler = CheckoutCartHandler::new(
            CartClient::new(carts.client()),
            OrderClient::new(orders.client()),
        );

        let id = handler
            .handle(UserId::from("testuser"), details())
            .await
            .unwrap();

        assert_eq!(id, OrderId(4));
        assert_eq!(carts.received(), vec!["List", "DeleteMatching"]);
        assert_eq!(orders.take_created()[0].shipping_option(), "Express");
        carts.verify();
        orders.verify();
    }

    fn new_row(item: u32, quantity: u32) -> NewCartItem {
        NewCartItem {
            user_id: UserId::from("testuser"),
            item_id: ItemId(item),
            item_name: format!("Item {item}"),
            unit_price: dec!(10.00),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_rows_changed_during_checkout_stay_in_cart() {
        let (cart_store, carts) = cart_actor::new(8);
        tokio::spawn(cart_store.run());
        let (sender, mut order_requests) = mpsc::channel(1);
        let handler =
            CheckoutCartHandler::new(carts.clone(), OrderClient::new(StoreClient::new(sender)));
        carts.add_item(new_row(1, 1)).await.unwrap();
        carts.add_item(new_row(2, 1)).await.unwrap();

        let checkout =
            tokio::spawn(async move { handler.handle(UserId::from("testuser"), details()).await });

        // The order is in flight while the shopper keeps using the cart.
        let Some(StoreRequest::Create { params, respond_to }) = order_requests.recv().await else {
            panic!("checkout did not store an order");
        };
        assert_eq!(params.items().len(), 2);
        carts.add_item(new_row(1, 3)).await.unwrap();
        carts.add_item(new_row(3, 5)).await.unwrap();
        respond_to.send(Ok(OrderId(1))).unwrap();

        assert_eq!(checkout.await.unwrap().unwrap(), OrderId(1));
        let left: Vec<_> = carts
            .list_for_user(UserId::from("testuser"))
            .await
            .unwrap()
            .iter()
            .map(|item| (item.item_id(), item.quantity()))
            .collect();
        assert_eq!(left, vec![(ItemId(1), 4), (ItemId(3), 5)]);
    }
}
