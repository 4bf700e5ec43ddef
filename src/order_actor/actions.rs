//! Filters and status commands for the order store.

use crate::model::{Order, UserId};

/// Selects orders inside the store.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    All,
    User(UserId),
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::User(user_id) => order.user_id() == user_id,
        }
    }
}

/// Status transitions applied to a stored order.
///
/// Each one runs the matching [`Order`] command inside the store, so the
/// check and the write happen in a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Cancel,
    Ship,
    Deliver,
}
