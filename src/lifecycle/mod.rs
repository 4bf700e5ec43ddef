//! # Lifecycle
//!
//! Starting and stopping the shop.
//!
//! [`WebShop::start`] creates both stores, spawns each on its own Tokio task
//! and keeps their clients. Neither store depends on the other, so there is
//! no start order to respect.
//!
//! Shutdown relies on channel closure:
//!
//! 1. every client is dropped, closing the sending side of each channel;
//! 2. each store's `recv()` returns `None` after the queued requests are served;
//! 3. [`WebShop::shutdown`] awaits the tasks and reports one that panicked.
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`] module.

mod web_shop;
pub mod tracing;

pub use self::tracing::*;
pub use web_shop::*;
