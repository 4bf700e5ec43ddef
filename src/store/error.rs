//! # Store Errors

/// Errors surfaced by a store request.
///
/// `E` is the entity's own error type, passed through untouched so callers can
/// match on domain failures without downcasting.
#[derive(Debug, thiserror::Error)]
pub enum StoreError<E> {
    #[error("store is closed")]
    Closed,
    #[error("store dropped the reply channel")]
    Dropped,
    #[error("row not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Entity(E),
}
