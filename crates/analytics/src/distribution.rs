//! Count-based distributions: order status, payment method, stock state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_orders::{Order, OrderStatus, PaymentType};

/// Orders per status. Only statuses that occur are present.
pub type StatusCounts = BTreeMap<OrderStatus, usize>;

/// Orders per payment type. Only payment types that occur are present.
pub type PaymentCounts = BTreeMap<PaymentType, usize>;

/// Products split by their stock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatus {
    pub in_stock: usize,
    pub out_of_stock: usize,
}

impl StockStatus {
    pub fn total(&self) -> usize {
        self.in_stock + self.out_of_stock
    }
}

pub fn aggregate_status_counts<'a, I>(orders: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut counts = StatusCounts::new();
    for order in orders {
        *counts.entry(order.status().clone()).or_insert(0) += 1;
    }
    counts
}

pub fn aggregate_payment_methods<'a, I>(orders: I) -> PaymentCounts
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut counts = PaymentCounts::new();
    for order in orders {
        *counts.entry(order.payment_type().clone()).or_insert(0) += 1;
    }
    counts
}

pub fn aggregate_stock_status(products: &[Product]) -> StockStatus {
    products
        .iter()
        .fold(StockStatus::default(), |mut acc, product| {
            if product.is_in_stock() {
                acc.in_stock += 1;
            } else {
                acc.out_of_stock += 1;
            }
            acc
        })
}

/// Lookup that treats an absent status as zero orders.
pub fn count_status(counts: &StatusCounts, status: &OrderStatus) -> usize {
    counts.get(status).copied().unwrap_or(0)
}

/// Lookup that treats an absent payment type as zero orders.
pub fn count_payment_type(counts: &PaymentCounts, payment_type: &PaymentType) -> usize {
    counts.get(payment_type).copied().unwrap_or(0)
}
