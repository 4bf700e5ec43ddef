//! # ViewCart
//!
//! Read-only summary of one user's cart.

use crate::clients::CartClient;
use crate::error::ShopError;
use crate::model::{guard, CartItem, CartItemId, DomainError, ItemId, UserId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

/// One cart row as shown to the shopper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: CartItemId,
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<&CartItem> for CartItemDto {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id(),
            item_id: item.item_id(),
            item_name: item.item_name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            total_price: item.total_price(),
        }
    }
}

/// The user's cart with its totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartItemDto>,
    #[serde(with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,
    pub total_items: u64,
}

impl CartSummary {
    /// Summarises `items` in the order given.
    ///
    /// Fails with [`DomainError::Validation`] when the rows add up to more than
    /// a `Decimal` can hold.
    pub fn from_items(items: &[CartItem]) -> Result<Self, DomainError> {
        Ok(Self {
            items: items.iter().map(CartItemDto::from).collect(),
            sub_total: guard::sum(items.iter().map(CartItem::total_price), "subTotal")?,
            total_items: items.iter().map(|item| u64::from(item.quantity())).sum(),
        })
    }
}

#[derive(Clone)]
pub struct ViewCartHandler {
    carts: CartClient,
}

impl ViewCartHandler {
    pub fn new(carts: CartClient) -> Self {
        Self { carts }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, user_id: UserId) -> Result<CartSummary, ShopError> {
        if user_id.as_str().trim().is_empty() {
            return Err(DomainError::Validation("userId must not be empty".to_string()).into());
        }
        let items = self.carts.list_for_user(user_id).await?;
        let summary = CartSummary::from_items(&items)?;
        debug!(rows = summary.items.len(), sub_total = %summary.sub_total, "Cart summarised");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCartItem;
    use crate::store::mock::MockStore;
    use rust_decimal_macros::dec;

    fn row(id: u32, item: u32, price: Decimal, quantity: u32) -> CartItem {
        CartItem::new(
            CartItemId(id),
            NewCartItem {
                user_id: UserId::from("testuser"),
                item_id: ItemId(item),
                item_name: format!("Item {item}"),
                unit_price: price,
                quantity,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_summary_totals() {
        let summary = CartSummary::from_items(&[
            row(1, 1, dec!(999.99), 1),
            row(2, 2, dec!(29.99), 2),
        ])
        .unwrap();

        assert_eq!(summary.sub_total, dec!(1059.97));
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.items[1].total_price, dec!(59.98));
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = CartSummary::from_items(&[]).unwrap();
        assert!(summary.items.is_empty());
        assert_eq!(summary.sub_total, Decimal::ZERO);
        assert_eq!(summary.total_items, 0);
    }

    #[tokio::test]
    async fn test_rows_too_large_to_total_are_an_error() {
        let huge = dec!(40000000000000000000000000000);
        let mut mock = MockStore::<CartItem>::new();
        mock.expect_list()
            .return_ok(vec![row(1, 1, huge, 1), row(2, 2, huge, 1)]);
        let handler = ViewCartHandler::new(CartClient::new(mock.client()));

        let result = handler.handle(UserId::from("testuser")).await;

        assert_eq!(
            result,
            Err(ShopError::Domain(DomainError::Validation(
                "subTotal is too large".to_string()
            )))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_blank_user_is_rejected_before_querying() {
        let mock = MockStore::<CartItem>::new();
        let handler = ViewCartHandler::new(CartClient::new(mock.client()));

        let result = handler.handle(UserId::from("  ")).await;

        assert!(matches!(result, Err(ShopError::Domain(DomainError::Validation(_)))));
        assert!(mock.received().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_sent_as_filter() {
        let mut mock = MockStore::<CartItem>::new();
        mock.expect_list()
            .return_ok(vec![row(2, 2, dec!(29.99), 2), row(1, 1, dec!(999.99), 1)]);
        let handler = ViewCartHandler::new(CartClient::new(mock.client()));

        let summary = handler.handle(UserId::from("testuser")).await.unwrap();

        assert_eq!(summary.items[0].id, CartItemId(1));
        assert_eq!(summary.total_items, 3);
        assert_eq!(mock.received(), vec!["List"]);
        mock.verify();
    }
}
