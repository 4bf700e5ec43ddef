use crate::model::{guard, CartItemId, DomainError, ItemId, UserId};
use rust_decimal::Decimal;

/// One product line in a user's shopping cart.
///
/// # Store
/// Managed by a [`StoreActor`](crate::store::StoreActor); see
/// [`cart_actor`](crate::cart_actor) for the filter type.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    id: CartItemId,
    user_id: UserId,
    item_id: ItemId,
    item_name: String,
    unit_price: Decimal,
    quantity: u32,
    total_price: Decimal,
}

/// Payload for adding an item to a cart.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub item_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl NewCartItem {
    /// Checks the same rules [`CartItem::new`] enforces, without building a row.
    pub fn validate(&self) -> Result<(), DomainError> {
        guard::not_blank(self.user_id.as_str(), "userId")?;
        guard::item_id(self.item_id)?;
        guard::not_blank(&self.item_name, "itemName")?;
        guard::unit_price(self.unit_price)?;
        guard::quantity(self.quantity)?;
        guard::line_total(self.quantity, self.unit_price).map(|_| ())
    }
}

/// Payload for changing the quantity of an existing row.
#[derive(Debug, Clone)]
pub struct CartItemUpdate {
    pub quantity: u32,
}

impl CartItem {
    /// Validates `params` and builds the row under `id`.
    pub fn new(id: CartItemId, params: NewCartItem) -> Result<Self, DomainError> {
        params.validate()?;
        let total_price = guard::line_total(params.quantity, params.unit_price)?;
        Ok(Self {
            id,
            user_id: params.user_id,
            item_id: params.item_id,
            item_name: params.item_name,
            unit_price: params.unit_price,
            quantity: params.quantity,
            total_price,
        })
    }

    pub fn update_quantity(&mut self, quantity: u32) -> Result<(), DomainError> {
        self.set_line(quantity, self.unit_price)
    }

    pub fn update_price(&mut self, unit_price: Decimal) -> Result<(), DomainError> {
        self.set_line(self.quantity, unit_price)
    }

    /// Whether `params` adds to this row rather than starting a new one.
    pub fn same_line(&self, params: &NewCartItem) -> bool {
        self.user_id == params.user_id && self.item_id == params.item_id
    }

    /// Adds `params.quantity` to the row and takes over its unit price.
    pub fn merge(&mut self, params: &NewCartItem) -> Result<(), DomainError> {
        params.validate()?;
        let quantity = self
            .quantity
            .checked_add(params.quantity)
            .ok_or_else(|| DomainError::Validation("quantity is too large".to_string()))?;
        self.set_line(quantity, params.unit_price)
    }

    pub fn id(&self) -> CartItemId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    fn set_line(&mut self, quantity: u32, unit_price: Decimal) -> Result<(), DomainError> {
        guard::quantity(quantity)?;
        guard::unit_price(unit_price)?;
        self.total_price = guard::line_total(quantity, unit_price)?;
        self.quantity = quantity;
        self.unit_price = unit_price;
        Ok(())
    }
}
