//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber once, at startup.
//!
//! - `RUST_LOG` selects levels per module; without it the shop logs at `info`.
//! - The compact format shows spans inline (e.g. `handle:add_order`) and hides
//!   module paths; store events carry an `entity_type` field instead.
//! - HTTP requests get their own span from `tower-http`'s `TraceLayer`.
//!
//! ```bash
//! RUST_LOG=info cargo run                       # one line per state change
//! RUST_LOG=debug cargo run                      # request payloads as well
//! RUST_LOG=webshop=debug,tower_http=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, placing an order looks like:
//!
//! ```text
//! INFO handle:add_order: Created entity_type="Order" id=order_1 rows=1
//! INFO handle: Order placed id=order_1 total=1149.96
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the store
        .compact()
        .init();
}
