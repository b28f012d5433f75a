//! Fixtures shared by the unit tests in this crate.

use chrono::{DateTime, Utc};

use storefront_catalog::Product;
use storefront_core::{Amount, OrderId, ProductId};
use storefront_orders::{LineItem, NewOrder, Order, OrderStatus, PaymentType, ShippingAddress};

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn order(id: &str, amount: f64, status: OrderStatus, created_at: &str) -> Order {
    order_with_items(id, amount, status, created_at, Vec::new())
}

pub fn order_paid_with(id: &str, payment_type: PaymentType, created_at: &str) -> Order {
    Order::new(NewOrder {
        id: OrderId::new(id).unwrap(),
        customer_id: None,
        created_at: at(created_at),
        amount: Amount::new(10.0).unwrap(),
        status: OrderStatus::Placed,
        payment_type,
        is_paid: true,
        items: Vec::new(),
        address: ShippingAddress::default(),
    })
}

pub fn order_with_items(
    id: &str,
    amount: f64,
    status: OrderStatus,
    created_at: &str,
    items: Vec<(&str, u32)>,
) -> Order {
    Order::new(NewOrder {
        id: OrderId::new(id).unwrap(),
        customer_id: None,
        created_at: at(created_at),
        amount: Amount::new(amount).unwrap(),
        status,
        payment_type: PaymentType::Cod,
        is_paid: false,
        items: items
            .into_iter()
            .map(|(product, quantity)| {
                LineItem::new(ProductId::new(product).unwrap(), quantity).unwrap()
            })
            .collect(),
        address: ShippingAddress::default(),
    })
}

pub fn product(id: &str, name: &str, category: &str, price: f64, in_stock: bool) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        name,
        category,
        Amount::new(price).unwrap(),
        in_stock,
    )
    .unwrap()
}
