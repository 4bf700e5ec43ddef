//! Guard clauses used by constructors and mutators.

use crate::model::{DomainError, ItemId};
use rust_decimal::Decimal;

pub(crate) fn not_blank(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

pub(crate) fn item_id(id: ItemId) -> Result<(), DomainError> {
    if id.0 == 0 {
        return Err(DomainError::Validation(
            "itemId must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn quantity(quantity: u32) -> Result<(), DomainError> {
    if quantity == 0 {
        return Err(DomainError::Validation(
            "quantity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn unit_price(price: Decimal) -> Result<(), DomainError> {
    if price < Decimal::ZERO {
        return Err(DomainError::Validation(
            "unitPrice must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// `quantity × unit_price`, or `Validation` when the product does not fit a `Decimal`.
pub(crate) fn line_total(quantity: u32, unit_price: Decimal) -> Result<Decimal, DomainError> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| too_large("line total"))
}

/// Sum of `amounts`, or `Validation` on overflow.
pub(crate) fn sum(
    amounts: impl IntoIterator<Item = Decimal>,
    what: &str,
) -> Result<Decimal, DomainError> {
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| too_large(what))
    })
}

fn too_large(what: &str) -> DomainError {
    DomainError::Validation(format!("{what} is too large"))
}
