use crate::model::{guard, DomainError, ItemId};
use rust_decimal::Decimal;

/// One line of an [`Order`](crate::model::Order).
///
/// Has no identity of its own: it is created, changed and dropped only
/// through the order that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    item_id: ItemId,
    item_name: String,
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
}

impl OrderItem {
    pub(crate) fn new(
        item_id: ItemId,
        item_name: String,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, DomainError> {
        guard::item_id(item_id)?;
        guard::not_blank(&item_name, "itemName")?;
        guard::quantity(quantity)?;
        guard::unit_price(unit_price)?;
        let total_price = guard::line_total(quantity, unit_price)?;
        Ok(Self {
            item_id,
            item_name,
            quantity,
            unit_price,
            total_price,
        })
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `quantity × unit_price`.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}
