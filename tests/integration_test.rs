use rust_decimal_macros::dec;
use webshop::config::ShopConfig;
use webshop::error::ShopError;
use webshop::lifecycle::WebShop;
use webshop::model::{DomainError, ItemId, OrderStatus, UserId};
use webshop::store::Repository;
use webshop::use_cases::{
    AddToCartCommand, CheckoutDetails, LineItem, PlaceOrderCommand, RemoveFromCartCommand,
};

fn line(id: u32, name: &str, price: rust_decimal::Decimal, quantity: u32) -> LineItem {
    LineItem {
        item_id: ItemId(id),
        item_name: name.to_string(),
        unit_price: price,
        quantity,
    }
}

fn details() -> CheckoutDetails {
    CheckoutDetails {
        customer_address: "1 Main Street".to_string(),
        shipping_option: "Standard".to_string(),
        payment_method: "CreditCard".to_string(),
    }
}

/// Full flow with real stores: fill a cart, check out, fulfil the order.
#[tokio::test]
async fn test_cart_to_delivery() {
    let shop = WebShop::start(&ShopConfig::default());
    let state = shop.app_state();
    let user = UserId::from("testuser");

    for item in [
        line(1, "Laptop", dec!(999.99), 1),
        line(2, "Mouse", dec!(29.99), 2),
        line(3, "Keyboard", dec!(89.99), 1),
    ] {
        state
            .cart
            .add(AddToCartCommand {
                user_id: user.clone(),
                item,
            })
            .await
            .expect("Failed to add to cart");
    }

    // Another shopper's cart must not leak into this one.
    state
        .cart
        .add(AddToCartCommand {
            user_id: UserId::from("someone-else"),
            item: line(1, "Laptop", dec!(999.99), 4),
        })
        .await
        .unwrap();

    let summary = state.view_cart.handle(user.clone()).await.unwrap();
    assert_eq!(summary.items.len(), 3);
    assert_eq!(summary.sub_total, dec!(1149.96));
    assert_eq!(summary.total_items, 4);

    let order_id = state
        .checkout
        .handle(user.clone(), details())
        .await
        .expect("Checkout failed");

    let order = state.orders.get(order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.total_amount, dec!(1149.96));
    assert_eq!(order.items.len(), 3);

    let emptied = state.view_cart.handle(user.clone()).await.unwrap();
    assert!(emptied.items.is_empty());
    let other = state
        .view_cart
        .handle(UserId::from("someone-else"))
        .await
        .unwrap();
    assert_eq!(other.total_items, 4);

    assert_eq!(
        state.orders.ship(order_id).await.unwrap().status,
        OrderStatus::Shipped
    );
    assert_eq!(
        state.orders.deliver(order_id).await.unwrap().status,
        OrderStatus::Delivered
    );

    drop(state);
    shop.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_orders_never_reach_the_store() {
    let shop = WebShop::start(&ShopConfig::default());
    let state = shop.app_state();

    let duplicate = state
        .place_order
        .handle(PlaceOrderCommand {
            user_id: UserId::from("testuser"),
            customer_address: "1 Main Street".to_string(),
            shipping_option: "Standard".to_string(),
            payment_method: "CreditCard".to_string(),
            items: vec![
                line(1, "Laptop", dec!(999.99), 1),
                line(1, "Laptop", dec!(999.99), 1),
            ],
        })
        .await;
    assert_eq!(
        duplicate,
        Err(ShopError::Domain(DomainError::DuplicateItem(ItemId(1))))
    );

    let empty_checkout = state
        .checkout
        .handle(UserId::from("testuser"), details())
        .await;
    assert!(matches!(
        empty_checkout,
        Err(ShopError::Domain(DomainError::Validation(_)))
    ));

    let orders = shop
        .order_client
        .list(webshop::order_actor::OrderFilter::All)
        .await
        .unwrap();
    assert!(orders.is_empty());

    drop(state);
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_from_cart() {
    let shop = WebShop::start(&ShopConfig::default());
    let state = shop.app_state();
    let user = UserId::from("testuser");

    state
        .cart
        .add(AddToCartCommand {
            user_id: user.clone(),
            item: line(2, "Mouse", dec!(29.99), 1),
        })
        .await
        .unwrap();
    state
        .cart
        .remove(RemoveFromCartCommand {
            user_id: user.clone(),
            item_id: ItemId(2),
        })
        .await
        .unwrap();

    let summary = state.view_cart.handle(user).await.unwrap();
    assert!(summary.items.is_empty());

    drop(state);
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stopped_store_reports_unavailable() {
    let (store, client) = webshop::cart_actor::new(1);
    let handle = tokio::spawn(store.run());
    handle.abort();
    let _ = handle.await;

    let result = client.list_for_user(UserId::from("testuser")).await;

    assert!(matches!(result, Err(ShopError::Unavailable(_))));
}
