//! # Order Client
//!
//! Provides a high-level API for the order store. It wraps a
//! `StoreClient<Order>` and exposes order-specific methods.

use crate::error::ShopError;
use crate::model::{Order, OrderId, OrderStatus, UserId};
use crate::order_actor::{OrderAction, OrderFilter};
use crate::store::{Repository, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the order store.
#[derive(Clone)]
pub struct OrderClient {
    store: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(store: StoreClient<Order>) -> Self {
        Self { store }
    }

    /// Persists a fully built order, lines included.
    #[instrument(skip(self, order), fields(user_id = %order.user_id(), total = %order.total_amount()))]
    pub async fn add_order(&self, order: Order) -> Result<OrderId, ShopError> {
        debug!("Sending request");
        Ok(self.store.create(order).await?)
    }

    /// The user's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, ShopError> {
        let mut orders = self.list(OrderFilter::User(user_id)).await?;
        orders.sort_by_key(|order| order.id());
        Ok(orders)
    }

    /// Applies a status command and returns the new status.
    #[instrument(skip(self))]
    pub async fn apply(&self, id: OrderId, action: OrderAction) -> Result<OrderStatus, ShopError> {
        debug!("Sending request");
        Ok(self.store.perform_action(id, action).await?)
    }
}

#[async_trait]
impl Repository<Order> for OrderClient {
    type Error = ShopError;

    fn store(&self) -> &StoreClient<Order> {
        &self.store
    }

    fn map_error(e: StoreError<crate::model::DomainError>) -> ShopError {
        e.into()
    }
}
