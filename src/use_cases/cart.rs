//! # Cart commands
//!
//! Add, change and remove rows of a user's cart. A user holds at most one row
//! per catalog item: adding an item that is already in the cart raises the
//! row's quantity and refreshes its price.

use crate::clients::CartClient;
use crate::error::ShopError;
use crate::model::{CartItem, CartItemId, CartItemUpdate, DomainError, ItemId, NewCartItem, UserId};
use crate::store::Repository;
use crate::use_cases::{CartItemDto, LineItem};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct AddToCartCommand {
    pub user_id: UserId,
    pub item: LineItem,
}

#[derive(Debug, Clone)]
pub struct UpdateCartItemCommand {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct RemoveFromCartCommand {
    pub user_id: UserId,
    pub item_id: ItemId,
}

/// Handles every command that changes a cart.
#[derive(Clone)]
pub struct CartCommandHandler {
    carts: CartClient,
}

impl CartCommandHandler {
    pub fn new(carts: CartClient) -> Self {
        Self { carts }
    }

    /// Returns the id of the row now holding the item.
    #[instrument(skip(self))]
    pub async fn add(&self, command: AddToCartCommand) -> Result<CartItemId, ShopError> {
        let params = NewCartItem {
            user_id: command.user_id,
            item_id: command.item.item_id,
            item_name: command.item.item_name,
            unit_price: command.item.unit_price,
            quantity: command.item.quantity,
        };
        params.validate()?;

        let id = self.carts.add_item(params).await?;
        info!(%id, "Item put in cart");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, command: UpdateCartItemCommand) -> Result<CartItemDto, ShopError> {
        let row = self.row(command.user_id, command.item_id).await?;
        let update = CartItemUpdate {
            quantity: command.quantity,
        };
        let updated = self.carts.update_item(row.id(), update).await?;
        Ok(CartItemDto::from(&updated))
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, command: RemoveFromCartCommand) -> Result<(), ShopError> {
        let row = self.row(command.user_id, command.item_id).await?;
        self.carts.delete(row.id()).await?;
        info!(id = %row.id(), "Cart row removed");
        Ok(())
    }

    async fn row(&self, user_id: UserId, item_id: ItemId) -> Result<CartItem, ShopError> {
        let missing = DomainError::NotFound(format!("Item {item_id} in the cart of {user_id}"));
        self.carts
            .find(user_id, item_id)
            .await?
            .ok_or(ShopError::Domain(missing))
    }
}
