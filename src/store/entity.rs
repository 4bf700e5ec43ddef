//! # StoredEntity Trait
//!
//! The contract every row type (orders, cart items) implements to be owned by a
//! [`StoreActor`](crate::store::StoreActor). Associated types pin down the
//! payloads each request carries, so an `Order` store can only ever be sent
//! order payloads.
//!
//! Hooks are synchronous: a store processes one request at a time and the
//! entity logic never needs to wait on anything else.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A row type that can live inside a [`StoreActor`](crate::store::StoreActor).
pub trait StoredEntity: Clone + Debug + Send + Sync + 'static {
    /// Identifier assigned by the store on insert. Built from a sequential `u32`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for inserting a new row.
    type Create: Send + Debug;

    /// Payload for replacing parts of an existing row.
    type Update: Send + Debug;

    /// Entity-specific command (e.g. cancelling an order).
    type Action: Send + Debug;

    /// Value returned by a successful [`StoredEntity::Action`].
    type ActionResult: Send + Debug;

    /// Predicate evaluated inside the store for `List` and `DeleteMatching`.
    type Filter: Send + Debug;

    /// Error raised by the entity's own rules.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the row from the id chosen by the store and the insert payload.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this row is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Applies an update in place.
    ///
    /// The store calls this on a copy of the row and only keeps the copy when
    /// it returns `Ok`, so implementations may fail halfway through.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Runs an entity-specific command. Same copy-then-commit rule as
    /// [`StoredEntity::apply_update`].
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Whether an `Upsert` of `params` should be folded into this row instead
    /// of inserting a new one. Rows never absorb inserts unless overridden.
    fn absorbs(&self, _params: &Self::Create) -> bool {
        false
    }

    /// Folds an `Upsert` payload into this row. Only called when
    /// [`StoredEntity::absorbs`] returned `true`; same copy-then-commit rule as
    /// [`StoredEntity::apply_update`].
    fn absorb(&mut self, _params: Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the row is removed. Returning an error keeps the row.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
