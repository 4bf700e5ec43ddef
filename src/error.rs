//! Error returned by clients and use cases.

use crate::model::DomainError;
use crate::store::StoreError;
use thiserror::Error;

/// Failure of a shop operation.
///
/// Domain failures are the caller's problem (bad input, wrong status, missing
/// row). `Unavailable` means a store task is gone and nothing was decided.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl ShopError {
    /// Stable machine-readable name, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ShopError::Domain(e) => e.code(),
            ShopError::Unavailable(_) => "unavailable",
        }
    }
}

impl From<StoreError<DomainError>> for ShopError {
    fn from(e: StoreError<DomainError>) -> Self {
        match e {
            StoreError::Entity(domain) => ShopError::Domain(domain),
            StoreError::NotFound(id) => ShopError::Domain(DomainError::NotFound(id)),
            StoreError::Closed | StoreError::Dropped => ShopError::Unavailable(e.to_string()),
        }
    }
}
