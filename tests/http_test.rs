use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use webshop::config::ShopConfig;
use webshop::lifecycle::WebShop;
use webshop::web::{build_router, ErrorResponse};

fn create_test_server() -> (TestServer, WebShop) {
    let shop = WebShop::start(&ShopConfig::default());
    let app = build_router(shop.app_state());
    let server = TestServer::try_new(app).expect("Failed to create test server");
    (server, shop)
}

fn order_body(items: Value) -> Value {
    json!({
        "userId": "testuser",
        "customerAddress": "1 Main Street",
        "shippingOption": "Standard",
        "paymentMethod": "CreditCard",
        "items": items,
    })
}

async fn add_to_cart(server: &TestServer, user: &str, item_id: u32, price: f64, quantity: u32) {
    server
        .post(&format!("/cart/{user}/items"))
        .json(&json!({
            "itemId": item_id,
            "itemName": format!("Item {item_id}"),
            "unitPrice": price,
            "quantity": quantity,
        }))
        .await
        .assert_status(StatusCode::CREATED);
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _shop) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod order_tests {
    use super::*;

    #[tokio::test]
    async fn test_place_order_returns_created_id() {
        let (server, _shop) = create_test_server();

        let response = server
            .post("/orders")
            .json(&order_body(json!([
                {"itemId": 1, "itemName": "Laptop", "unitPrice": 999.99, "quantity": 1},
                {"itemId": 2, "itemName": "Mouse", "unitPrice": 29.99, "quantity": 2},
                {"itemId": 3, "itemName": "Keyboard", "unitPrice": 89.99, "quantity": 1},
            ])))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["orderId"], 1);

        let order: Value = server.get("/orders/1").await.json();
        assert_eq!(order["status"], "Completed");
        assert_eq!(order["totalAmount"], 1149.96);
        assert_eq!(order["items"].as_array().unwrap().len(), 3);
        assert_eq!(order["userId"], "testuser");
    }

    #[tokio::test]
    async fn test_empty_order_is_a_bad_request() {
        let (server, _shop) = create_test_server();

        let response = server.post("/orders").json(&order_body(json!([]))).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "validation_error");
        assert!(body.errors[0].contains("must contain at least one item"));

        server
            .get("/orders/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_item_is_a_bad_request() {
        let (server, _shop) = create_test_server();

        let response = server
            .post("/orders")
            .json(&order_body(json!([
                {"itemId": 1, "itemName": "Laptop", "unitPrice": 999.99, "quantity": 1},
                {"itemId": 1, "itemName": "Laptop", "unitPrice": 999.99, "quantity": 1},
            ])))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "duplicate_item");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_bad_request() {
        let (server, _shop) = create_test_server();

        let response = server
            .post("/orders")
            .json(&json!({ "userId": "testuser" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "bad_request");
    }

    #[tokio::test]
    async fn test_status_commands() {
        let (server, _shop) = create_test_server();
        server
            .post("/orders")
            .json(&order_body(json!([
                {"itemId": 1, "itemName": "Laptop", "unitPrice": 999.99, "quantity": 1},
            ])))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .post("/orders/1/cancel")
            .await
            .assert_status(StatusCode::CONFLICT);

        let shipped = server.post("/orders/1/ship").await;
        shipped.assert_status_ok();
        let body: Value = shipped.json();
        assert_eq!(body, json!({ "orderId": 1, "status": "Shipped" }));

        server
            .post("/orders/1/deliver")
            .await
            .assert_status_ok();
        server
            .post("/orders/7/ship")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .post("/orders/abc/ship")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_user_orders() {
        let (server, _shop) = create_test_server();
        for _ in 0..2 {
            server
                .post("/orders")
                .json(&order_body(json!([
                    {"itemId": 4, "itemName": "Monitor", "unitPrice": 199.5, "quantity": 2},
                ])))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let mine: Value = server.get("/users/testuser/orders").await.json();
        let mine = mine.as_array().unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0]["orderId"], 1);
        assert_eq!(mine[1]["totalAmount"], 399.0);

        let theirs: Value = server.get("/users/nobody/orders").await.json();
        assert_eq!(theirs, json!([]));
    }
}

mod cart_tests {
    use super::*;

    #[tokio::test]
    async fn test_view_cart_only_shows_own_rows() {
        let (server, _shop) = create_test_server();
        add_to_cart(&server, "testuser", 1, 999.99, 1).await;
        add_to_cart(&server, "other", 1, 999.99, 3).await;
        add_to_cart(&server, "testuser", 2, 29.99, 2).await;

        let response = server.get("/cart/testuser").await;
        response.assert_status_ok();

        let cart: Value = response.json();
        assert_eq!(cart["items"].as_array().unwrap().len(), 2);
        assert_eq!(cart["subTotal"], 1059.97);
        assert_eq!(cart["totalItems"], 3);
        assert_eq!(cart["items"][1]["totalPrice"], 59.98);
    }

    #[tokio::test]
    async fn test_overflowing_cart_row_is_a_bad_request() {
        let (server, _shop) = create_test_server();
        add_to_cart(&server, "testuser", 1, 999.99, 1).await;

        let response = server
            .post("/cart/testuser/items")
            .json(&json!({
                "itemId": 2,
                "itemName": "Yacht",
                "unitPrice": 5e28,
                "quantity": 2,
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "validation_error");

        let cart: Value = server.get("/cart/testuser").await.json();
        assert_eq!(cart["totalItems"], 1);
    }

    #[tokio::test]
    async fn test_undecodable_user_path_gets_error_body() {
        let (server, _shop) = create_test_server();

        let response = server.get("/cart/%FF").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "bad_request");
    }

    #[tokio::test]
    async fn test_update_and_remove_item() {
        let (server, _shop) = create_test_server();
        add_to_cart(&server, "testuser", 2, 29.99, 1).await;

        let updated = server
            .put("/cart/testuser/items/2")
            .json(&json!({ "quantity": 3 }))
            .await;
        updated.assert_status_ok();
        let row: Value = updated.json();
        assert_eq!(row["quantity"], 3);

        server
            .put("/cart/testuser/items/2")
            .json(&json!({ "quantity": 0 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .delete("/cart/testuser/items/2")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete("/cart/testuser/items/2")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_checkout_moves_cart_into_an_order() {
        let (server, _shop) = create_test_server();
        add_to_cart(&server, "testuser", 1, 999.99, 1).await;
        add_to_cart(&server, "testuser", 2, 29.99, 2).await;
        add_to_cart(&server, "testuser", 3, 89.99, 1).await;

        let response = server
            .post("/cart/testuser/checkout")
            .json(&json!({
                "customerAddress": "1 Main Street",
                "shippingOption": "Express",
                "paymentMethod": "PayPal",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();

        let order: Value = server
            .get(&format!("/orders/{}", created["orderId"]))
            .await
            .json();
        assert_eq!(order["totalAmount"], 1149.96);
        assert_eq!(order["shippingOption"], "Express");

        let cart: Value = server.get("/cart/testuser").await.json();
        assert_eq!(cart["totalItems"], 0);

        server
            .post("/cart/testuser/checkout")
            .json(&json!({
                "customerAddress": "1 Main Street",
                "shippingOption": "Express",
                "paymentMethod": "PayPal",
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
