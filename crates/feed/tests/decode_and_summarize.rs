use chrono::{DateTime, Utc};
use serde_json::json;

use storefront_analytics::{StockStatus, count_status, summarize};
use storefront_feed::{FeedError, decode_orders, decode_products};
use storefront_orders::OrderStatus;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-02-03T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn seller_orders_body() -> String {
    json!({
        "success": true,
        "orders": [
            {
                "_id": "65b1000000000000000000a1",
                "amount": 100,
                "status": "Placed",
                "paymentType": "COD",
                "isPaid": false,
                "createdAt": "2024-01-15T10:00:00.000Z",
                "items": [{ "product": { "_id": "p1", "name": "Phone" }, "quantity": 1 }],
                "address": { "firstName": "Asha", "city": "Pune" }
            },
            {
                "_id": "65b1000000000000000000a2",
                "amount": 200,
                "status": "Delivered",
                "paymentType": "Online",
                "isPaid": true,
                "createdAt": "2024-01-20T10:00:00.000Z",
                "items": [{ "product": "p2", "quantity": 2 }]
            },
            {
                "_id": "65b1000000000000000000a3",
                "amount": 50,
                "status": "Placed",
                "paymentType": "COD",
                "createdAt": "2024-02-01T10:00:00.000Z",
                "items": [{ "product": "p3", "quantity": 1 }]
            }
        ]
    })
    .to_string()
}

fn product_list_body() -> String {
    json!({
        "success": true,
        "products": [
            { "_id": "p1", "name": "Phone", "category": "Phones", "offerPrice": 100, "inStock": true },
            { "_id": "p2", "name": "Case", "category": "Accessories", "offerPrice": 100, "inStock": true },
            { "_id": "p3", "name": "Cable", "category": "Accessories", "offerPrice": 50, "inStock": false }
        ]
    })
    .to_string()
}

#[test]
fn backend_snapshot_flows_into_dashboard_summary() {
    let orders = decode_orders(&seller_orders_body()).expect("orders decode");
    let products = decode_products(&product_list_body()).expect("products decode");

    let summary = summarize(&orders, &products, now(), &Utc);

    assert_eq!(summary.total_orders, 3);
    assert_eq!(summary.total_products, 3);
    assert_eq!(count_status(&summary.status_counts, &OrderStatus::Placed), 2);
    assert_eq!(count_status(&summary.status_counts, &OrderStatus::Delivered), 1);
    assert_eq!(summary.monthly_sales.get(&0), Some(&300.0));
    assert_eq!(summary.monthly_sales.get(&1), Some(&50.0));
    assert_eq!(
        summary.stock_status,
        StockStatus {
            in_stock: 2,
            out_of_stock: 1
        }
    );
    assert_eq!(summary.recent_orders.len(), 1);
    assert_eq!(summary.latest_orders[0].reference, "#65B10000");
}

#[test]
fn one_bad_record_fails_the_whole_snapshot() {
    let body = json!({
        "success": true,
        "orders": [
            {
                "_id": "ok",
                "amount": 10,
                "status": "Placed",
                "paymentType": "COD",
                "createdAt": "2024-01-15T10:00:00Z",
                "items": []
            },
            {
                "_id": "no-date",
                "amount": 10,
                "status": "Placed",
                "paymentType": "COD",
                "items": []
            }
        ]
    })
    .to_string();

    let err = decode_orders(&body).unwrap_err();
    assert!(matches!(err, FeedError::Contract { index: 1, .. }));
    assert!(err.to_string().contains("createdAt"));
}

#[test]
fn empty_snapshot_is_not_an_error() {
    let orders = decode_orders(r#"{ "success": true, "orders": [] }"#).unwrap();
    let products = decode_products(r#"{ "success": true, "products": [] }"#).unwrap();

    let summary = summarize(&orders, &products, now(), &Utc);
    assert!(summary.status_counts.is_empty());
    assert!(summary.monthly_sales.is_empty());
    assert_eq!(summary.stock_status, StockStatus::default());
}
