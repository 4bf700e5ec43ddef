//! # Store Client
//!
//! The cloneable, typed front door to a [`StoreActor`](crate::store::StoreActor).

use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use crate::store::message::{Reply, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Sends requests to a store and awaits the replies.
///
/// Holds only the channel sender, so clones are cheap and can be handed to
/// every task that needs the store.
pub struct StoreClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoredEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    /// Inserts `params`, or folds them into the row that absorbs them.
    pub async fn upsert(&self, params: T::Create) -> Result<T::Id, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Upsert { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::List { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    /// Deletes every row matching `filter`; returns how many were removed.
    pub async fn delete_matching(&self, filter: T::Filter) -> Result<usize, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::DeleteMatching { filter, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError<T::Error>> {
        self.call(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Reply<R, T::Error>) -> StoreRequest<T>,
    ) -> Result<R, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
