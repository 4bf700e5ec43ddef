//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::store::StoreClient) to its
//! [`StoreActor`](crate::store::StoreActor). Every request carries a one-shot
//! reply channel.

use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel for a store request.
pub type Reply<R, E> = oneshot::Sender<Result<R, StoreError<E>>>;

/// A request to a store of `T` rows.
///
/// Besides plain CRUD the store answers filtered queries (`List`,
/// `DeleteMatching`) so callers never have to pull every row and filter
/// client-side.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    Create {
        params: T::Create,
        respond_to: Reply<T::Id, T::Error>,
    },
    /// Merges into the row that [`StoredEntity::absorbs`] the payload, or
    /// inserts a new row when none does. Replies with the id of the row.
    Upsert {
        params: T::Create,
        respond_to: Reply<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Reply<Option<T>, T::Error>,
    },
    List {
        filter: T::Filter,
        respond_to: Reply<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Reply<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Reply<(), T::Error>,
    },
    DeleteMatching {
        filter: T::Filter,
        respond_to: Reply<usize, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Reply<T::ActionResult, T::Error>,
    },
}

impl<T: StoredEntity> StoreRequest<T> {
    /// Short name used in logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreRequest::Create { .. } => "Create",
            StoreRequest::Upsert { .. } => "Upsert",
            StoreRequest::Get { .. } => "Get",
            StoreRequest::List { .. } => "List",
            StoreRequest::Update { .. } => "Update",
            StoreRequest::Delete { .. } => "Delete",
            StoreRequest::DeleteMatching { .. } => "DeleteMatching",
            StoreRequest::Action { .. } => "Action",
        }
    }
}
