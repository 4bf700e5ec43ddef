//! # WebShop
//!
//! A small layered web shop: carts, checkout and orders behind a JSON API.
//!
//! ```text
//! HTTP (axum) ──► use_cases ──► clients ──► StoreActor<Order> / StoreActor<CartItem>
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Domain ([`model`])
//! The [`Order`](model::Order) aggregate guards its own invariants: lines
//! change only while the order is pending, an item appears once, and the total
//! is recomputed on every change. [`CartItem`](model::CartItem) rows validate
//! quantity and price the same way.
//!
//! ### 2. The Engine ([`store`])
//! A generic [`StoreActor<T>`](store::StoreActor) owns the rows of one entity
//! type in a Tokio task and serves requests over a channel. Entity rules are
//! plugged in through [`StoredEntity`](store::StoredEntity); the
//! [`order_actor`] and [`cart_actor`] modules bind the domain types to it.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) and [`CartClient`](clients::CartClient)
//! wrap the generic client and translate failures into [`ShopError`](error::ShopError).
//!
//! ### 4. The Use Cases ([`use_cases`])
//! PlaceOrder, ViewCart, the cart commands, CheckoutCart and the order
//! queries. Validation and aggregate mutation happen in memory before any
//! store write.
//!
//! ### 5. The Surface ([`web`]) and the Orchestrator ([`lifecycle`])
//! An axum router over the use cases, and [`WebShop`](lifecycle::WebShop),
//! which starts and stops the stores.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info WEBSHOP_BIND=127.0.0.1:8080 cargo run
//! ```
//!
//! ## Testing
//!
//! See [`store::mock`] for testing use cases without running stores.

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod store;
pub mod use_cases;
pub mod web;
