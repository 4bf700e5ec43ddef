//! # Cart Client
//!
//! Provides a high-level API for the cart store. All per-user queries are
//! sent as filters and evaluated inside the store.

use crate::cart_actor::CartFilter;
use crate::error::ShopError;
use crate::model::{CartItem, CartItemId, CartItemUpdate, DomainError, ItemId, NewCartItem, UserId};
use crate::store::{Repository, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the cart store.
#[derive(Clone)]
pub struct CartClient {
    store: StoreClient<CartItem>,
}

impl CartClient {
    pub fn new(store: StoreClient<CartItem>) -> Self {
        Self { store }
    }

    /// Puts the item in the user's cart in one store request. An existing row
    /// for the same item gets the extra quantity and the new unit price.
    #[instrument(skip(self))]
    pub async fn add_item(&self, params: NewCartItem) -> Result<CartItemId, ShopError> {
        debug!("Sending request");
        Ok(self.store.upsert(params).await?)
    }

    /// Every row in the user's cart, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, ShopError> {
        let mut items = self.list(CartFilter::User(user_id)).await?;
        items.sort_by_key(CartItem::id);
        Ok(items)
    }

    /// The user's row for `item_id`, if the item is in the cart.
    #[instrument(skip(self))]
    pub async fn find(
        &self,
        user_id: UserId,
        item_id: ItemId,
    ) -> Result<Option<CartItem>, ShopError> {
        let items = self.list(CartFilter::UserItem(user_id, item_id)).await?;
        Ok(items.into_iter().min_by_key(CartItem::id))
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: CartItemId,
        update: CartItemUpdate,
    ) -> Result<CartItem, ShopError> {
        debug!("Sending request");
        Ok(self.store.update(id, update).await?)
    }

    /// Deletes the given rows in one request, skipping any that changed since
    /// they were read. Returns the number of rows removed.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn remove_rows(&self, rows: Vec<CartItem>) -> Result<usize, ShopError> {
        debug!("Sending request");
        Ok(self.store.delete_matching(CartFilter::Rows(rows)).await?)
    }
}

#[async_trait]
impl Repository<CartItem> for CartClient {
    type Error = ShopError;

    fn store(&self) -> &StoreClient<CartItem> {
        &self.store
    }

    fn map_error(e: StoreError<DomainError>) -> ShopError {
        e.into()
    }
}
