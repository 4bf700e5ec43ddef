//! # Order Aggregate
//!
//! An [`Order`] is the only way to reach its [`OrderItem`]s. Every change goes
//! through a command method that checks the order's invariants first and
//! touches state only once all checks have passed:
//!
//! - lines can be added or removed only while the order is `Pending`;
//! - an item id appears at most once;
//! - `total_amount` always equals the sum of the line totals;
//! - status moves `Pending → Completed → Shipped → Delivered`, with
//!   `Cancelled` reachable from `Pending` only.

use crate::model::{guard, DomainError, ItemId, OrderId, OrderItem, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    Shipped,
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

/// A customer order and its lines.
#[derive(Debug, Clone)]
pub struct Order {
    id: Option<OrderId>,
    user_id: UserId,
    customer_address: String,
    shipping_option: String,
    payment_method: String,
    items: Vec<OrderItem>,
    total_amount: Decimal,
    status: OrderStatus,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Starts an empty `Pending` order.
    ///
    /// Fails with [`DomainError::Validation`] when any argument is blank.
    pub fn new(
        user_id: UserId,
        customer_address: impl Into<String>,
        shipping_option: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let customer_address = customer_address.into();
        let shipping_option = shipping_option.into();
        let payment_method = payment_method.into();
        guard::not_blank(user_id.as_str(), "userId")?;
        guard::not_blank(&customer_address, "customerAddress")?;
        guard::not_blank(&shipping_option, "shippingOption")?;
        guard::not_blank(&payment_method, "paymentMethod")?;

        Ok(Self {
            id: None,
            user_id,
            customer_address,
            shipping_option,
            payment_method,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        })
    }

    /// Appends a line and recomputes the total.
    pub fn add_item(
        &mut self,
        item_id: ItemId,
        item_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<(), DomainError> {
        self.ensure_pending("add items to")?;
        if self.items.iter().any(|item| item.item_id() == item_id) {
            return Err(DomainError::DuplicateItem(item_id));
        }
        let item = OrderItem::new(item_id, item_name.into(), quantity, unit_price)?;
        let total = guard::sum(
            self.items.iter().chain([&item]).map(OrderItem::total_price),
            "totalAmount",
        )?;
        self.items.push(item);
        self.total_amount = total;
        Ok(())
    }

    /// Drops the line for `item_id` and recomputes the total.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<(), DomainError> {
        self.ensure_pending("remove items from")?;
        let position = self
            .items
            .iter()
            .position(|item| item.item_id() == item_id)
            .ok_or_else(|| DomainError::NotFound(format!("Item {item_id}")))?;
        let total = guard::sum(
            self.items
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != position)
                .map(|(_, item)| item.total_price()),
            "totalAmount",
        )?;
        self.items.remove(position);
        self.total_amount = total;
        Ok(())
    }

    /// `Pending → Completed`. Requires at least one line.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.ensure_pending("complete")?;
        if self.items.is_empty() {
            return Err(DomainError::InvalidState(
                "Cannot complete an order without items".to_string(),
            ));
        }
        self.status = OrderStatus::Completed;
        Ok(())
    }

    /// `Pending → Cancelled`. Cancelling an already cancelled order succeeds
    /// without change; completed orders cannot be cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            OrderStatus::Pending => {
                self.status = OrderStatus::Cancelled;
                Ok(())
            }
            OrderStatus::Cancelled => Ok(()),
            OrderStatus::Completed | OrderStatus::Shipped | OrderStatus::Delivered => {
                Err(self.illegal("cancel"))
            }
        }
    }

    /// `Completed → Shipped`.
    pub fn ship(&mut self) -> Result<(), DomainError> {
        self.advance(OrderStatus::Completed, OrderStatus::Shipped, "ship")
    }

    /// `Shipped → Delivered`.
    pub fn deliver(&mut self) -> Result<(), DomainError> {
        self.advance(OrderStatus::Shipped, OrderStatus::Delivered, "deliver")
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    pub fn shipping_option(&self) -> &str {
        &self.shipping_option
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Set once, by the order store, when the order is persisted.
    pub(crate) fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
    }

    fn advance(
        &mut self,
        from: OrderStatus,
        to: OrderStatus,
        verb: &str,
    ) -> Result<(), DomainError> {
        if self.status != from {
            return Err(self.illegal(verb));
        }
        self.status = to;
        Ok(())
    }

    fn ensure_pending(&self, verb: &str) -> Result<(), DomainError> {
        if self.status != OrderStatus::Pending {
            return Err(self.illegal(verb));
        }
        Ok(())
    }

    fn illegal(&self, verb: &str) -> DomainError {
        DomainError::InvalidState(format!("Cannot {verb} an order that is {}", self.status))
    }
}
