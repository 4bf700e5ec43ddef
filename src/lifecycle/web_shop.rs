use crate::clients::{CartClient, OrderClient};
use crate::config::ShopConfig;
use crate::web::AppState;
use crate::{cart_actor, order_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// A store task ended abnormally.
#[derive(Debug, thiserror::Error)]
#[error("store task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// The running shop: one store task per entity type and their clients.
///
/// # Example
///
/// ```ignore
/// let shop = WebShop::start(&ShopConfig::default());
/// let app = web::build_router(shop.app_state());
/// // serve `app` ...
/// shop.shutdown().await?;
/// ```
pub struct WebShop {
    /// Client for the order store
    pub order_client: OrderClient,

    /// Client for the cart store
    pub cart_client: CartClient,

    handles: Vec<JoinHandle<()>>,
}

impl WebShop {
    /// Spawns the stores. Must be called inside a Tokio runtime.
    pub fn start(config: &ShopConfig) -> Self {
        let (order_store, order_client) = order_actor::new(config.store_capacity);
        let (cart_store, cart_client) = cart_actor::new(config.store_capacity);

        let handles = vec![
            tokio::spawn(order_store.run()),
            tokio::spawn(cart_store.run()),
        ];
        info!(capacity = config.store_capacity, "Stores started");

        Self {
            order_client,
            cart_client,
            handles,
        }
    }

    /// Handlers for the HTTP layer, wired to this shop's stores.
    pub fn app_state(&self) -> AppState {
        AppState::new(self.order_client.clone(), self.cart_client.clone())
    }

    /// Drops the clients and waits for every store to stop.
    ///
    /// Stores stop only once *all* clients are gone, so anything else holding
    /// one (a router's state, for instance) must be dropped first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down stores...");
        drop(self.order_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
