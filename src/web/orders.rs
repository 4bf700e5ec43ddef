//! Order endpoints.

use crate::model::{OrderId, UserId};
use crate::use_cases::{OrderStatusView, OrderView, PlaceOrderCommand};
use crate::web::{ApiError, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order_id: OrderId,
}

/// `POST /orders`
pub async fn place_order(
    State(state): State<AppState>,
    body: Result<Json<PlaceOrderCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreated>), ApiError> {
    let Json(command) = body?;
    let order_id = state.place_order.handle(command).await?;
    Ok((StatusCode::CREATED, Json(OrderCreated { order_id })))
}

/// `GET /orders/{order_id}`
pub async fn get_order(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<OrderView>, ApiError> {
    let Path(order_id) = path?;
    Ok(Json(state.orders.get(order_id).await?))
}

/// `GET /users/{user_id}/orders`
pub async fn list_user_orders(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    let Path(user_id) = path?;
    Ok(Json(state.orders.list_for_user(user_id).await?))
}

/// `POST /orders/{order_id}/cancel`
pub async fn cancel_order(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<OrderStatusView>, ApiError> {
    let Path(order_id) = path?;
    Ok(Json(state.orders.cancel(order_id).await?))
}

/// `POST /orders/{order_id}/ship`
pub async fn ship_order(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<OrderStatusView>, ApiError> {
    let Path(order_id) = path?;
    Ok(Json(state.orders.ship(order_id).await?))
}

/// `POST /orders/{order_id}/deliver`
pub async fn deliver_order(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<OrderStatusView>, ApiError> {
    let Path(order_id) = path?;
    Ok(Json(state.orders.deliver(order_id).await?))
}
