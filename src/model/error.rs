//! Error type shared by the domain model.

use crate::model::ItemId;
use thiserror::Error;

/// Failures raised by the Order aggregate and cart rows.
///
/// Every command that returns one of these has left its target unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// The operation is not allowed in the current status.
    #[error("{0}")]
    InvalidState(String),

    /// The order already holds a line for this item.
    #[error("Item {0} is already in the order")]
    DuplicateItem(ItemId),

    /// The referenced row or order line does not exist.
    #[error("{0} not found")]
    NotFound(String),
}

impl DomainError {
    /// Stable machine-readable name, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::InvalidState(_) => "invalid_state",
            DomainError::DuplicateItem(_) => "duplicate_item",
            DomainError::NotFound(_) => "not_found",
        }
    }
}
