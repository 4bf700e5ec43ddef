//! # Store
//!
//! In-process storage for the shop. Each entity type gets its own
//! [`StoreActor`], a Tokio task that owns the rows and answers requests sent
//! over a channel by cloneable [`StoreClient`]s.
//!
//! The store separates two concerns:
//!
//! 1. **Entity rules** ([`StoredEntity`]): how a row is built, filtered, updated
//!    and acted upon. Written once per domain type, synchronously.
//! 2. **Plumbing** ([`StoreActor`], [`StoreClient`], [`StoreRequest`]): message
//!    passing, id assignment, copy-then-commit writes and logging.
//!
//! Resource-specific clients sit on top through the [`Repository`] trait, and
//! [`mock::MockStore`] replaces a running store in tests.

mod actor;
mod client;
mod entity;
mod error;
mod message;
pub mod mock;
mod repository;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::{Reply, StoreRequest};
pub use repository::Repository;
