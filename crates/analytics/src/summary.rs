//! One-shot dashboard snapshot.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::Amount;
use storefront_orders::{Order, OrderStatus};

use crate::distribution::{
    PaymentCounts, StatusCounts, StockStatus, aggregate_payment_methods, aggregate_status_counts,
    aggregate_stock_status,
};
use crate::recent::{bucket_by_trailing_day, select_recent_orders};
use crate::sales::{MonthlySales, aggregate_monthly_sales, monthly_series};

/// Rows shown in the "Recent Orders" table.
pub const LATEST_ORDERS_LIMIT: usize = 5;

/// Table row for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub amount: Amount,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            reference: order.short_reference(),
            created_at: order.created_at(),
            status: order.status().clone(),
            amount: order.amount(),
        }
    }
}

/// Everything the seller dashboard renders for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub total_orders: usize,
    pub total_products: usize,
    pub status_counts: StatusCounts,
    pub monthly_sales: MonthlySales,
    /// `monthly_sales` as a January-first series for the bar chart.
    pub monthly_series: [f64; 12],
    pub stock_status: StockStatus,
    pub payment_methods: PaymentCounts,
    pub recent_orders: Vec<Order>,
    /// Orders per local date, oldest first, today last.
    pub daily_trend: [usize; 7],
    /// First rows of the order list as delivered by the backend (newest first upstream).
    pub latest_orders: Vec<OrderRow>,
}

/// Runs every dashboard projection over one snapshot.
///
/// Nothing is retained between calls; a refresh simply calls this again.
#[tracing::instrument(skip_all, fields(orders = orders.len(), products = products.len()))]
pub fn summarize<Tz: TimeZone>(
    orders: &[Order],
    products: &[Product],
    now: DateTime<Utc>,
    tz: &Tz,
) -> DashboardSummary {
    let monthly_sales = aggregate_monthly_sales(orders, tz);
    let recent = select_recent_orders(orders, now);
    let daily_trend = bucket_by_trailing_day(recent.iter().copied(), now, tz);

    let summary = DashboardSummary {
        generated_at: now,
        total_orders: orders.len(),
        total_products: products.len(),
        status_counts: aggregate_status_counts(orders),
        monthly_series: monthly_series(&monthly_sales),
        monthly_sales,
        stock_status: aggregate_stock_status(products),
        payment_methods: aggregate_payment_methods(orders),
        recent_orders: recent.into_iter().cloned().collect(),
        daily_trend,
        latest_orders: orders
            .iter()
            .take(LATEST_ORDERS_LIMIT)
            .map(OrderRow::from)
            .collect(),
    };

    tracing::debug!(
        statuses = summary.status_counts.len(),
        months = summary.monthly_sales.len(),
        recent = summary.recent_orders.len(),
        "dashboard summary computed"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::count_status;
    use crate::test_support::{at, order, product};

    #[test]
    fn summary_of_empty_snapshot_is_all_zero() {
        let summary = summarize(&[], &[], at("2024-03-10T12:00:00Z"), &Utc);

        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_products, 0);
        assert!(summary.status_counts.is_empty());
        assert!(summary.monthly_sales.is_empty());
        assert_eq!(summary.monthly_series, [0.0; 12]);
        assert_eq!(summary.stock_status, StockStatus::default());
        assert!(summary.payment_methods.is_empty());
        assert!(summary.recent_orders.is_empty());
        assert_eq!(summary.daily_trend, [0; 7]);
        assert!(summary.latest_orders.is_empty());
    }

    #[test]
    fn summary_combines_all_projections() {
        let now = at("2024-02-03T12:00:00Z");
        let orders = vec![
            order("aaaaaaaa-1", 100.0, OrderStatus::Placed, "2024-01-15T10:00:00Z"),
            order("bbbbbbbb-2", 200.0, OrderStatus::Delivered, "2024-01-20T10:00:00Z"),
            order("cccccccc-3", 50.0, OrderStatus::Placed, "2024-02-01T10:00:00Z"),
        ];
        let products = vec![
            product("p1", "Phone", "Phones", 100.0, true),
            product("p2", "Case", "Accessories", 10.0, true),
            product("p3", "Cable", "Accessories", 5.0, false),
        ];

        let summary = summarize(&orders, &products, now, &Utc);

        assert_eq!(summary.total_orders, 3);
        assert_eq!(count_status(&summary.status_counts, &OrderStatus::Placed), 2);
        assert_eq!(summary.monthly_sales, MonthlySales::from([(0, 300.0), (1, 50.0)]));
        assert_eq!(summary.monthly_series[0], 300.0);
        assert_eq!(summary.stock_status.in_stock, 2);
        assert_eq!(summary.stock_status.out_of_stock, 1);

        assert_eq!(summary.recent_orders.len(), 1);
        assert_eq!(summary.recent_orders[0].id_typed().as_str(), "cccccccc-3");
        assert_eq!(summary.daily_trend, [0, 0, 0, 0, 1, 0, 0]);

        assert_eq!(summary.latest_orders.len(), 3);
        assert_eq!(summary.latest_orders[0].reference, "#AAAAAAAA");
    }

    #[test]
    fn latest_orders_are_capped() {
        let orders: Vec<Order> = (0..8)
            .map(|i| order(&format!("order-{i}"), 1.0, OrderStatus::Placed, "2024-01-01T00:00:00Z"))
            .collect();

        let summary = summarize(&orders, &[], at("2024-03-10T12:00:00Z"), &Utc);
        assert_eq!(summary.latest_orders.len(), LATEST_ORDERS_LIMIT);
        assert_eq!(summary.latest_orders[4].reference, "#ORDER-4");
    }

    #[test]
    fn summary_serializes_with_wire_keys() {
        let orders = vec![order("a1", 10.0, OrderStatus::OutForDelivery, "2024-03-09T10:00:00Z")];
        let summary = summarize(&orders, &[], at("2024-03-10T12:00:00Z"), &Utc);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["statusCounts"]["Out for Delivery"], 1);
        assert_eq!(json["paymentMethods"]["COD"], 1);
        assert_eq!(json["monthlySales"]["2"], 10.0);
        assert_eq!(json["stockStatus"]["outOfStock"], 0);
        assert_eq!(json["dailyTrend"][5], 1);
    }
}
