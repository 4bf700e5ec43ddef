//! [`StoredEntity`] implementation for [`Order`].
//!
//! Orders are built and validated in memory by the use cases and inserted as a
//! whole, lines included. After that only status commands change them; there
//! is no field-level update.

use super::actions::{OrderAction, OrderFilter};
use crate::model::{DomainError, Order, OrderId, OrderStatus};
use crate::store::StoredEntity;
use std::convert::Infallible;

impl StoredEntity for Order {
    type Id = OrderId;
    type Create = Order;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Filter = OrderFilter;
    type Error = DomainError;

    fn from_create(id: OrderId, mut order: Order) -> Result<Self, DomainError> {
        order.assign_id(id);
        Ok(order)
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    fn apply_update(&mut self, update: Infallible) -> Result<(), DomainError> {
        match update {}
    }

    /// Runs the status command and reports the resulting status.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, DomainError> {
        match action {
            OrderAction::Cancel => self.cancel()?,
            OrderAction::Ship => self.ship()?,
            OrderAction::Deliver => self.deliver()?,
        }
        Ok(self.status())
    }
}
