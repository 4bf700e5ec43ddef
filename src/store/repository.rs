//! # Repository Trait
//!
//! Gives resource-specific clients (`OrderClient`, `CartClient`) the common
//! read and delete operations for free, translated into the client's own
//! error type.

use crate::store::{StoreClient, StoreError, StoredEntity};
use async_trait::async_trait;

/// Shared operations for clients wrapping a [`StoreClient`].
///
/// Implementors provide access to the inner client and an error mapping;
/// `get`, `list` and `delete` come with default implementations.
#[async_trait]
pub trait Repository<T: StoredEntity>: Send + Sync {
    /// The client's error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn store(&self) -> &StoreClient<T>;

    /// Converts a store failure into the client's error type.
    fn map_error(e: StoreError<T::Error>) -> Self::Error;

    /// Fetches one row by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().get(id).await.map_err(Self::map_error)
    }

    /// Fetches every row selected by `filter`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().list(filter).await.map_err(Self::map_error)
    }

    /// Removes one row by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.store().delete(id).await.map_err(Self::map_error)
    }
}
