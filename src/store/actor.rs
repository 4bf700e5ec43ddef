//! # Store Actor
//!
//! The server half of a store. A `StoreActor<T>` owns every `T` row in a
//! `HashMap` and the receiving end of the request channel. Requests are
//! handled strictly one after another inside a single Tokio task, so the rows
//! need no `Mutex`: exclusive ownership of the map is the lock.
//!
//! Writes that go through entity logic (`Update`, `Action`) are applied to a
//! copy of the row first. The copy replaces the stored row only when the
//! entity accepts the change, which keeps aggregates whole when a command is
//! rejected halfway.

use crate::store::client::StoreClient;
use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the rows of one entity type and serves [`StoreRequest`]s.
///
/// # Usage
///
/// 1. `StoreActor::new(capacity)` returns the actor and a cloneable client.
/// 2. Spawn `actor.run()` on the runtime.
/// 3. Share the client; the actor stops once every client is dropped.
///
/// Ids come from an internal counter starting at 1. A rejected insert does
/// not consume an id.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    rows: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates the actor and its client.
    ///
    /// `capacity` bounds the request channel; clients wait for room when the
    /// store falls behind.
    pub fn new(capacity: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let actor = Self {
            receiver,
            rows: HashMap::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until the channel closes.
    pub async fn run(mut self) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Store started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(entity_type, request);
        }

        info!(entity_type, rows = self.rows.len(), "Store stopped");
    }

    fn handle(&mut self, entity_type: &'static str, request: StoreRequest<T>) {
        match request {
            StoreRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let result = self.insert(params);
                match &result {
                    Ok(id) => info!(entity_type, %id, rows = self.rows.len(), "Created"),
                    Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Upsert { params, respond_to } => {
                debug!(entity_type, ?params, "Upsert");
                let result = self.upsert(entity_type, params);
                if let Err(e) = &result {
                    warn!(entity_type, error = %e, "Upsert rejected");
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Get { id, respond_to } => {
                let row = self.rows.get(&id).cloned();
                debug!(entity_type, %id, found = row.is_some(), "Get");
                let _ = respond_to.send(Ok(row));
            }
            StoreRequest::List { filter, respond_to } => {
                let rows: Vec<T> = self
                    .rows
                    .values()
                    .filter(|row| row.matches(&filter))
                    .cloned()
                    .collect();
                debug!(entity_type, ?filter, matched = rows.len(), "List");
                let _ = respond_to.send(Ok(rows));
            }
            StoreRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let result = self
                    .commit(&id, |row| row.apply_update(update))
                    .map(|(_, row)| row);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Updated"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Update rejected"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.remove(&id);
                match &result {
                    Ok(()) => info!(entity_type, %id, rows = self.rows.len(), "Deleted"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Delete rejected"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::DeleteMatching { filter, respond_to } => {
                debug!(entity_type, ?filter, "DeleteMatching");
                let result = self.remove_matching(&filter);
                match &result {
                    Ok(removed) => {
                        info!(entity_type, removed, rows = self.rows.len(), "Deleted matching")
                    }
                    Err(e) => warn!(entity_type, error = %e, "DeleteMatching rejected"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let result = self
                    .commit(&id, |row| row.handle_action(action))
                    .map(|(outcome, _)| outcome);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Action ok"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Action rejected"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    fn insert(&mut self, params: T::Create) -> Result<T::Id, StoreError<T::Error>> {
        let id = T::Id::from(self.next_id);
        let row = T::from_create(id.clone(), params).map_err(StoreError::Entity)?;
        self.next_id += 1;
        self.rows.insert(id.clone(), row);
        Ok(id)
    }

    /// Merges into the first row that absorbs `params`, or inserts a new row.
    fn upsert(
        &mut self,
        entity_type: &'static str,
        params: T::Create,
    ) -> Result<T::Id, StoreError<T::Error>> {
        let target = self
            .rows
            .iter()
            .find(|(_, row)| row.absorbs(&params))
            .map(|(id, _)| id.clone());

        match target {
            Some(id) => {
                self.commit(&id, |row| row.absorb(params))?;
                info!(entity_type, %id, "Merged");
                Ok(id)
            }
            None => {
                let id = self.insert(params)?;
                info!(entity_type, %id, rows = self.rows.len(), "Created");
                Ok(id)
            }
        }
    }

    /// Runs `apply` against a copy of the row and stores the copy on success.
    fn commit<R>(
        &mut self,
        id: &T::Id,
        apply: impl FnOnce(&mut T) -> Result<R, T::Error>,
    ) -> Result<(R, T), StoreError<T::Error>> {
        let row = self
            .rows
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut draft = row.clone();
        let outcome = apply(&mut draft).map_err(StoreError::Entity)?;
        *row = draft.clone();
        Ok((outcome, draft))
    }

    fn remove(&mut self, id: &T::Id) -> Result<(), StoreError<T::Error>> {
        let row = self
            .rows
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.on_delete().map_err(StoreError::Entity)?;
        self.rows.remove(id);
        Ok(())
    }

    /// Removes every matching row, or none if any of them refuses deletion.
    fn remove_matching(&mut self, filter: &T::Filter) -> Result<usize, StoreError<T::Error>> {
        let mut doomed = Vec::new();
        for (id, row) in &self.rows {
            if row.matches(filter) {
                row.on_delete().map_err(StoreError::Entity)?;
                doomed.push(id.clone());
            }
        }
        for id in &doomed {
            self.rows.remove(id);
        }
        Ok(doomed.len())
    }
}

/// Last path segment of the entity's type name, e.g. `CartItem`.
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
