//! Cart endpoints.

use crate::model::{CartItemId, ItemId, OrderId, UserId};
use crate::use_cases::{
    AddToCartCommand, CartItemDto, CartSummary, CheckoutDetails, LineItem, RemoveFromCartCommand,
    UpdateCartItemCommand,
};
use crate::web::{ApiError, AppState, OrderCreated};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreated {
    pub cart_item_id: CartItemId,
}

#[derive(Debug, Deserialize)]
pub struct QuantityChange {
    pub quantity: u32,
}

/// `GET /cart/{user_id}`
pub async fn view_cart(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<Json<CartSummary>, ApiError> {
    let Path(user_id) = path?;
    Ok(Json(state.view_cart.handle(user_id).await?))
}

/// `POST /cart/{user_id}/items`
pub async fn add_item(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
    body: Result<Json<LineItem>, JsonRejection>,
) -> Result<(StatusCode, Json<CartItemCreated>), ApiError> {
    let Path(user_id) = path?;
    let Json(item) = body?;
    let cart_item_id = state.cart.add(AddToCartCommand { user_id, item }).await?;
    Ok((StatusCode::CREATED, Json(CartItemCreated { cart_item_id })))
}

/// `PUT /cart/{user_id}/items/{item_id}`
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<(UserId, ItemId)>, PathRejection>,
    body: Result<Json<QuantityChange>, JsonRejection>,
) -> Result<Json<CartItemDto>, ApiError> {
    let Path((user_id, item_id)) = path?;
    let Json(change) = body?;
    let command = UpdateCartItemCommand {
        user_id,
        item_id,
        quantity: change.quantity,
    };
    Ok(Json(state.cart.update(command).await?))
}

/// `DELETE /cart/{user_id}/items/{item_id}`
pub async fn remove_item(
    State(state): State<AppState>,
    path: Result<Path<(UserId, ItemId)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((user_id, item_id)) = path?;
    state
        .cart
        .remove(RemoveFromCartCommand { user_id, item_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /cart/{user_id}/checkout`
pub async fn checkout(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
    body: Result<Json<CheckoutDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreated>), ApiError> {
    let Path(user_id) = path?;
    let Json(details) = body?;
    let order_id: OrderId = state.checkout.handle(user_id, details).await?;
    Ok((StatusCode::CREATED, Json(OrderCreated { order_id })))
}
