//! # HTTP surface
//!
//! A thin axum layer over the use cases. Handlers decode the request, call
//! one use case and encode the result; all failures go through [`ApiError`].
//!
//! | Route | Use case |
//! |---|---|
//! | `GET /cart/{user_id}` | ViewCart |
//! | `POST /cart/{user_id}/items` | AddToCart |
//! | `PUT /cart/{user_id}/items/{item_id}` | UpdateCartItem |
//! | `DELETE /cart/{user_id}/items/{item_id}` | RemoveFromCart |
//! | `POST /cart/{user_id}/checkout` | CheckoutCart |
//! | `POST /orders` | PlaceOrder |
//! | `GET /orders/{order_id}` | GetOrder |
//! | `GET /users/{user_id}/orders` | ListOrders |
//! | `POST /orders/{order_id}/{cancel,ship,deliver}` | status commands |
//! | `GET /health` | liveness |

mod cart;
mod error;
mod orders;

pub use cart::{CartItemCreated, QuantityChange};
pub use error::{ApiError, ErrorResponse};
pub use orders::OrderCreated;

use crate::clients::{CartClient, OrderClient};
use crate::use_cases::{
    CartCommandHandler, CheckoutCartHandler, OrderHandler, PlaceOrderHandler, ViewCartHandler,
};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

/// Use-case handlers shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub place_order: PlaceOrderHandler,
    pub view_cart: ViewCartHandler,
    pub cart: CartCommandHandler,
    pub checkout: CheckoutCartHandler,
    pub orders: OrderHandler,
}

impl AppState {
    pub fn new(orders: OrderClient, carts: CartClient) -> Self {
        Self {
            place_order: PlaceOrderHandler::new(orders.clone()),
            view_cart: ViewCartHandler::new(carts.clone()),
            cart: CartCommandHandler::new(carts.clone()),
            checkout: CheckoutCartHandler::new(carts, orders.clone()),
            orders: OrderHandler::new(orders),
        }
    }
}

/// Builds the application router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cart/{user_id}", get(cart::view_cart))
        .route("/cart/{user_id}/items", post(cart::add_item))
        .route(
            "/cart/{user_id}/items/{item_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route("/cart/{user_id}/checkout", post(cart::checkout))
        .route("/orders", post(orders::place_order))
        .route("/orders/{order_id}", get(orders::get_order))
        .route("/orders/{order_id}/cancel", post(orders::cancel_order))
        .route("/orders/{order_id}/ship", post(orders::ship_order))
        .route("/orders/{order_id}/deliver", post(orders::deliver_order))
        .route("/users/{user_id}/orders", get(orders::list_user_orders))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
